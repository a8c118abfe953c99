/// Open/closed state of a collapsible control (mobile sidebar, filter dropdown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Toggle {
    open: bool,
}

impl Toggle {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the state and return the new one.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_its_own_inverse() {
        for initial in [false, true] {
            let mut t = Toggle::new(initial);
            t.toggle();
            assert_ne!(t.is_open(), initial);
            t.toggle();
            assert_eq!(t.is_open(), initial);
        }
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut t = Toggle::new(true);
        t.close();
        t.close();
        assert!(!t.is_open());
    }
}
