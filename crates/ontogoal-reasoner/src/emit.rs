//! Solution emission: turning computed result sets into pushed bindings.
//!
//! Each binding is constructed fresh and handed to the caller's callback
//! immediately; ownership transfers with the call and the evaluator keeps no
//! reference. Emission order follows set iteration order and is unspecified.

use ontogoal_model::{Binding, Iri, Variable};

/// Push one single-variable binding per value.
pub fn emit_values(
    var: &Variable,
    values: impl IntoIterator<Item = Iri>,
    push: &mut dyn FnMut(Binding),
) {
    for value in values {
        let mut binding = Binding::new();
        binding.set(var.clone(), value);
        push(binding);
    }
}

/// For a fully-bound goal: push exactly one empty binding if the checked
/// fact holds, nothing otherwise.
pub fn emit_check(holds: bool, push: &mut dyn FnMut(Binding)) {
    if holds {
        push(Binding::new());
    }
}
