//! Behavioural tests for dialog commit and cancel.

use fss_model::{EditSession, Layout, Machine, ParameterModel, ParameterSet};
use proptest::prelude::*;

#[test]
fn single_field_commit_keeps_other_fields() {
    let mut model = ParameterModel::new(Layout::Shoe);
    let mut session = EditSession::new(model.get());

    // Commit an earlier machine edit so "last committed" differs from defaults.
    session
        .open_machine_group(model.get(), Machine::Costura)
        .unwrap();
    session.change_text("std_costura", "0.45").unwrap();
    session.commit(&mut model).unwrap();
    let before = model.get().clone();

    session.open_field(model.get(), "media_corte").unwrap();
    session.change_text("media_corte", "5.1").unwrap();
    session.commit(&mut model).unwrap();

    let after = model.get();
    assert_eq!(after.get("media_corte"), Some(5.1));
    for (spec, value) in before.iter() {
        if spec.name != "media_corte" {
            assert_eq!(
                after.get(spec.name).map(f64::to_bits),
                Some(value.to_bits()),
                "{} changed",
                spec.name
            );
        }
    }
    assert_eq!(after.get("std_costura"), Some(0.45));
}

#[test]
fn commit_overwrites_every_field_from_buffer() {
    let mut model = ParameterModel::new(Layout::Car);
    let mut session = EditSession::new(model.get());

    session.open_field(model.get(), "media_acabamento").unwrap();
    session.change_text("media_acabamento", "42").unwrap();
    // Text for a field outside the dialog is still part of the commit.
    session.change_text("estoque_inicial", "7 units").unwrap();
    session.commit(&mut model).unwrap();

    assert_eq!(model.get().get("media_acabamento"), Some(42.0));
    assert_eq!(model.get().get("estoque_inicial"), Some(7.0));
}

#[test]
fn commit_of_untouched_dialog_preserves_values_exactly() {
    let mut model = ParameterModel::new(Layout::Car);
    let before = model.get().clone();
    let mut session = EditSession::new(model.get());
    session
        .open_machine_group(model.get(), Machine::Injetora)
        .unwrap();
    session.commit(&mut model).unwrap();
    assert!(model.get().bit_eq(&before));
}

fn edit_script(layout: Layout) -> impl Strategy<Value = Vec<(usize, String)>> {
    let count = layout.parameters().len();
    prop::collection::vec((0..count, "\\PC{0,8}"), 0..12)
}

proptest! {
    #[test]
    fn cancel_leaves_model_untouched(
        use_machine in any::<bool>(),
        field in 0usize..9,
        edits in edit_script(Layout::Shoe),
    ) {
        let mut model = ParameterModel::new(Layout::Shoe);
        let mut session = EditSession::new(model.get());
        let before: ParameterSet = model.get().clone();

        if use_machine {
            session.open_machine_group(model.get(), Machine::Corte).unwrap();
        } else {
            let name = Layout::Shoe.parameters()[field].name;
            session.open_field(model.get(), name).unwrap();
        }
        for (index, text) in edits {
            let name = Layout::Shoe.parameters()[index].name;
            session.change_text(name, text).unwrap();
        }
        session.cancel(&model);

        prop_assert!(model.get().bit_eq(&before));
        prop_assert!(!session.is_open());

        // A later no-op commit must not resurrect the cancelled text.
        session.open_field(model.get(), "estoque_inicial").unwrap();
        session.commit(&mut model).unwrap();
        prop_assert!(model.get().bit_eq(&before));
    }
}
