mod share_note;
