use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub avatar: String,
    pub text: String,
}

/// Testimonial modal and its overlay, opened and closed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestimonialModal {
    shown: Option<Testimonial>,
}

impl TestimonialModal {
    pub fn open(&mut self, testimonial: Testimonial) {
        self.shown = Some(testimonial);
    }

    pub fn close(&mut self) {
        self.shown = None;
    }

    pub fn is_open(&self) -> bool {
        self.shown.is_some()
    }

    pub fn shown(&self) -> Option<&Testimonial> {
        self.shown.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonial(name: &str) -> Testimonial {
        Testimonial {
            name: name.to_string(),
            avatar: format!("/assets/images/{}.png", name),
            text: "Great work".to_string(),
        }
    }

    #[test]
    fn test_open_then_close() {
        let mut modal = TestimonialModal::default();
        assert!(!modal.is_open());
        modal.open(testimonial("daniel"));
        assert!(modal.is_open());
        assert_eq!(modal.shown().map(|t| t.name.as_str()), Some("daniel"));
        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.shown(), None);
    }

    #[test]
    fn test_open_replaces_content() {
        let mut modal = TestimonialModal::default();
        modal.open(testimonial("daniel"));
        modal.open(testimonial("jessica"));
        assert_eq!(modal.shown().map(|t| t.name.as_str()), Some("jessica"));
    }
}
