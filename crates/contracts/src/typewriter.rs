//! Typed-text animation for the profile title.
//!
//! A pure step machine: the frontend sleeps for `next_delay_ms` between
//! calls to [`Typewriter::tick`] and renders the returned text.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypewriterConfig {
    pub strings: Vec<String>,
    pub type_speed_ms: u32,
    pub back_speed_ms: u32,
    #[serde(default)]
    pub start_delay_ms: u32,
    /// Pause on a fully typed string before deleting it.
    #[serde(default = "default_back_delay")]
    pub back_delay_ms: u32,
    #[serde(default, rename = "loop")]
    pub looped: bool,
}

fn default_back_delay() -> u32 {
    700
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
    Done,
}

/// Text to render now and how long to wait before the next tick.
/// `next_delay_ms` is `None` once the animation has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub next_delay_ms: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypewriterConfig,
    index: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    /// Empty strings are dropped so every typing phase shows at least one
    /// character and the last string really is the last one typed.
    pub fn new(mut config: TypewriterConfig) -> Self {
        config.strings.retain(|s| !s.is_empty());
        let phase = if config.strings.is_empty() {
            Phase::Done
        } else {
            Phase::Typing
        };
        Self {
            config,
            index: 0,
            shown: 0,
            phase,
        }
    }

    pub fn start_delay_ms(&self) -> u32 {
        self.config.start_delay_ms
    }

    fn current(&self) -> &str {
        &self.config.strings[self.index]
    }

    fn text(&self) -> String {
        self.current().chars().take(self.shown).collect()
    }

    fn is_last(&self) -> bool {
        self.index + 1 == self.config.strings.len()
    }

    /// Advance one character forwards or backwards.
    pub fn tick(&mut self) -> Option<Step> {
        match self.phase {
            Phase::Done => None,
            Phase::Typing => {
                let len = self.current().chars().count();
                self.shown = (self.shown + 1).min(len);
                let next_delay_ms = if self.shown < len {
                    Some(self.config.type_speed_ms)
                } else if self.is_last() && !self.config.looped {
                    self.phase = Phase::Done;
                    None
                } else {
                    self.phase = Phase::Deleting;
                    Some(self.config.back_delay_ms)
                };
                Some(Step {
                    text: self.text(),
                    next_delay_ms,
                })
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                let text = self.text();
                let next_delay_ms = if self.shown > 0 {
                    self.config.back_speed_ms
                } else {
                    self.advance();
                    self.config.type_speed_ms
                };
                Some(Step {
                    text,
                    next_delay_ms: Some(next_delay_ms),
                })
            }
        }
    }

    fn advance(&mut self) {
        if self.is_last() && !self.config.looped {
            self.phase = Phase::Done;
            return;
        }
        self.index = (self.index + 1) % self.config.strings.len();
        self.phase = Phase::Typing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(strings: &[&str], looped: bool) -> TypewriterConfig {
        TypewriterConfig {
            strings: strings.iter().map(|s| s.to_string()).collect(),
            type_speed_ms: 200,
            back_speed_ms: 100,
            start_delay_ms: 50,
            back_delay_ms: 700,
            looped,
        }
    }

    fn run(tw: &mut Typewriter, steps: usize) -> Vec<Step> {
        (0..steps).filter_map(|_| tw.tick()).collect()
    }

    #[test]
    fn test_types_then_deletes() {
        let mut tw = Typewriter::new(config(&["ab", "c"], true));
        let steps = run(&mut tw, 6);
        let texts: Vec<&str> = steps.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "ab", "a", "", "c", ""]);
        assert_eq!(steps[0].next_delay_ms, Some(200));
        assert_eq!(steps[1].next_delay_ms, Some(700));
        assert_eq!(steps[2].next_delay_ms, Some(100));
        assert_eq!(steps[3].next_delay_ms, Some(200));
    }

    #[test]
    fn test_loops_back_to_first_string() {
        let mut tw = Typewriter::new(config(&["a", "b"], true));
        let texts: Vec<String> = run(&mut tw, 5).into_iter().map(|s| s.text).collect();
        assert_eq!(texts, vec!["a", "", "b", "", "a"]);
    }

    #[test]
    fn test_stops_on_last_string_without_loop() {
        let mut tw = Typewriter::new(config(&["a", "bc"], false));
        let steps = run(&mut tw, 10);
        let last = steps.last().unwrap();
        assert_eq!(last.text, "bc");
        assert_eq!(last.next_delay_ms, None);
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let mut tw = Typewriter::new(config(&["ёж"], false));
        assert_eq!(tw.tick().unwrap().text, "ё");
        assert_eq!(tw.tick().unwrap().text, "ёж");
    }

    #[test]
    fn test_trailing_empty_string_does_not_restart_without_loop() {
        let mut tw = Typewriter::new(config(&["a", ""], false));
        let steps = run(&mut tw, 8);
        let texts: Vec<&str> = steps.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["a"]);
        assert_eq!(steps[0].next_delay_ms, None);
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn test_leading_empty_string_types_immediately() {
        let mut tw = Typewriter::new(config(&["", "ab"], true));
        let first = tw.tick().unwrap();
        assert_eq!(first.text, "a");
        assert_eq!(first.next_delay_ms, Some(200));
    }

    #[test]
    fn test_empty_strings_finish_immediately() {
        let mut tw = Typewriter::new(config(&[""], true));
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn test_config_from_toml() {
        let cfg: TypewriterConfig = toml::from_str(
            r#"
strings = ["Web Developer", "Coder"]
type_speed_ms = 200
back_speed_ms = 100
loop = true
"#,
        )
        .unwrap();
        assert!(cfg.looped);
        assert_eq!(cfg.back_delay_ms, 700);
        assert_eq!(cfg.start_delay_ms, 0);
        assert_eq!(Typewriter::new(cfg).start_delay_ms(), 0);
    }
}
