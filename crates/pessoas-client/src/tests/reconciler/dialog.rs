use crate::tests::unified_v2;
use crate::{ClientError, DialogMode, DialogState, PersonDialog, SaveAction};

use pessoas_core::SchemaVersion;

fn fill(dialog: &mut PersonDialog) {
    let form = dialog.form_mut().unwrap();
    form.nome = "Ana".to_string();
    form.data_nascimento = "1990-05-01".to_string();
    form.set_cpf("12345678900");
}

#[test]
fn given_closed_dialog_when_create_saved_then_saving_then_closed() {
    let mut dialog = PersonDialog::new();
    dialog.open_create().unwrap();
    fill(&mut dialog);

    let request = dialog.begin_save().unwrap();

    assert_eq!(request.action, SaveAction::CreateV1);
    assert!(dialog.is_saving());

    dialog.finish();
    assert_eq!(dialog.state(), &DialogState::Closed);
}

#[test]
fn given_invalid_form_when_save_begun_then_dialog_stays_open() {
    let mut dialog = PersonDialog::new();
    dialog.open_create().unwrap();

    let err = dialog.begin_save().unwrap_err();

    assert!(matches!(err, ClientError::Validation { .. }));
    assert!(matches!(
        dialog.state(),
        DialogState::Open {
            mode: DialogMode::Create,
            ..
        }
    ));
}

#[test]
fn given_saving_dialog_when_save_begun_again_then_rejected() {
    let mut dialog = PersonDialog::new();
    dialog.open_create().unwrap();
    fill(&mut dialog);
    dialog.begin_save().unwrap();

    let err = dialog.begin_save().unwrap_err();

    assert!(matches!(err, ClientError::InvalidState { .. }));
    assert!(dialog.is_saving());
}

#[test]
fn given_v2_record_when_edited_without_address_then_migrates_down() {
    let mut dialog = PersonDialog::new();
    dialog.open_edit(&unified_v2(9)).unwrap().include_address = false;

    let request = dialog.begin_save().unwrap();

    assert_eq!(request.action, SaveAction::MigrateDown { from_v2_id: 9 });
    assert_eq!(
        dialog.state(),
        &DialogState::Saving {
            mode: DialogMode::Edit {
                id: 9,
                version: SchemaVersion::V2,
            },
        }
    );
}

#[test]
fn given_open_dialog_when_opened_again_then_rejected() {
    let mut dialog = PersonDialog::new();
    dialog.open_create().unwrap();

    assert!(dialog.open_edit(&unified_v2(1)).is_err());
}

#[test]
fn given_open_dialog_when_cancelled_then_closed() {
    let mut dialog = PersonDialog::new();
    dialog.open_create().unwrap();

    dialog.cancel();

    assert!(dialog.is_closed());
    assert!(dialog.form().is_none());
}

#[test]
fn given_closed_dialog_when_save_begun_then_rejected() {
    let mut dialog = PersonDialog::new();

    assert!(matches!(
        dialog.begin_save(),
        Err(ClientError::InvalidState { .. })
    ));
}
