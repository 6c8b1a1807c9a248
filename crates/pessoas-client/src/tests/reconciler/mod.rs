mod dialog;
mod merge;
mod person_form;
mod save_action;
