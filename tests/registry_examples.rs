//! Every documented error-code example must actually produce its code.
//!
//! The examples in `ftl_core::lang::errors` are shown to users next to the code; this keeps them honest.

use ftl::ast::Entry;
use ftl_core::lang::errors;

#[test]
fn registry_examples_produce_their_codes() {
    for info in errors::ERROR_CODES {
        if !errors::is_produced(info.id) {
            continue;
        }

        for example in info.examples {
            let document = ftl::parse(example.code);
            let Some(Entry::Junk(junk)) = document.body.first() else {
                panic!(
                    "example for {} did not start with junk: {:?}\n--- source ---\n{}",
                    info.canonical, document.body, example.code
                );
            };

            assert_eq!(junk.annotations.len(), 1);
            assert_eq!(
                junk.annotations[0].code, info.id,
                "example for {} produced {} ({})",
                info.canonical, junk.annotations[0].code, junk.annotations[0].message
            );
        }
    }
}

#[test]
fn annotation_messages_differ_from_descriptions() {
    // The short message is argument-filled; the registry description is the long-form help text.
    let document = ftl::parse("broken =\n");
    let junk = document.junk().next().expect("junk");
    let annotation = &junk.annotations[0];

    assert!(annotation.message.contains("broken"));
    assert_ne!(annotation.message, errors::description(annotation.code));
}
