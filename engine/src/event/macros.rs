//! Helper macros for [`Event`](super::Event) definitions.

/// Defines a conditional-skip event: the next instruction is skipped when the
/// predicate over the context and the decoded instruction holds.
macro_rules! define_skip_event {
    ($(#[$meta:meta])* $name:ident, |$ctx:ident, $ins:ident| $cond:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub(crate) struct $name;

        impl $crate::event::Event for $name {
            fn generate(
                $ctx: &mut $crate::execution::Interpreter,
                $ins: $crate::instruction::Instruction,
            ) -> Result<(), $crate::execution::InterpreterError> {
                let cond = $cond;
                $ctx.skip_if(cond);
                Ok(())
            }
        }
    };
}
