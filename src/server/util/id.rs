use rand::{distr::Alphanumeric, Rng};

const ID_RANDOM_CHARS: usize = 24;

/// Generates a collision-resistant primary key for new rows.
///
/// Ids are 25 characters: a leading `c` followed by random lowercase alphanumerics.
pub fn generate_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(ID_RANDOM_CHARS)
        .map(|byte| char::from(byte).to_ascii_lowercase())
        .collect();

    format!("c{}", suffix)
}
