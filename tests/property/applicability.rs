//! A command resolves in a state exactly when it is global or its predicate holds.

use monsh::commands::default_registry;
use monsh::context::ContextState;
use monsh::error::ShellError;
use proptest::prelude::*;

fn state() -> impl Strategy<Value = ContextState> {
    prop_oneof![
        Just(ContextState::Root),
        "[a-z]{1,8}".prop_map(|host| ContextState::AtHost { host }),
        ("[a-z]{1,8}", "[a-z]{1,8}")
            .prop_map(|(host, service)| ContextState::AtService { host, service }),
    ]
}

proptest! {
    #[test]
    fn resolve_agrees_with_applicability(state in state()) {
        let registry = default_registry().unwrap();
        for def in registry.iter() {
            let resolved = registry.resolve(&def.name, &state);
            if def.is_global() || def.applies(&state) {
                prop_assert!(resolved.is_ok());
            } else {
                prop_assert!(
                    matches!(resolved, Err(ShellError::NotApplicable(ref name)) if name == &def.name)
                );
            }
        }
        let applicable: Vec<&str> = registry.applicable(&state).map(|d| d.name.as_str()).collect();
        for global in ["host", "help", "up", "top", "exit", "quit"] {
            prop_assert!(applicable.contains(&global));
        }
    }

    #[test]
    fn unknown_names_never_resolve(state in state(), name in "x[a-z]{3,8}") {
        let registry = default_registry().unwrap();
        prop_assert!(
            matches!(registry.resolve(&name, &state), Err(ShellError::UnknownCommand(_)))
        );
    }
}
