pub mod test_helpers {
    use crate::config::Config;
    use crate::editor::Interpreter;
    use crate::input::{Disposition, RawKeyEvent, parse_key_notation};
    use crate::surface::{Modifiers, PortCall, RecordingSurface, SurfaceKey, TextRange};

    pub fn test_interpreter() -> Interpreter<TextRange> {
        Interpreter::new(&Config::default())
    }

    /// Feed a key sequence in Vim notation and collect the dispositions
    pub fn press(
        interp: &mut Interpreter<TextRange>,
        surface: &mut RecordingSurface,
        keys: &str,
    ) -> Vec<Disposition> {
        parse_key_notation(keys)
            .expect("valid key notation in test")
            .iter()
            .map(|event| interp.handle_key_event(surface, event))
            .collect()
    }

    pub fn press_event(
        interp: &mut Interpreter<TextRange>,
        surface: &mut RecordingSurface,
        event: RawKeyEvent,
    ) -> Disposition {
        interp.handle_key_event(surface, &event)
    }

    /// Run keys on a fresh interpreter and surface
    pub fn run_keys(keys: &str) -> (Interpreter<TextRange>, RecordingSurface) {
        let mut interp = test_interpreter();
        let mut surface = RecordingSurface::new();
        press(&mut interp, &mut surface, keys);
        (interp, surface)
    }

    pub fn emit(key: SurfaceKey, mods: Modifiers) -> PortCall {
        PortCall::emit(key, mods)
    }

    pub fn plain(key: SurfaceKey) -> PortCall {
        PortCall::emit(key, Modifiers::NONE)
    }
}
