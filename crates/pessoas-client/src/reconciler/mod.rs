pub(crate) mod dialog;
pub(crate) mod merge;
pub(crate) mod notification;
pub(crate) mod person_directory;
pub(crate) mod person_form;
pub(crate) mod save_action;
