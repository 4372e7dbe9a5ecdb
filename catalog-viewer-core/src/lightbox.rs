use crate::error::ViewerError;

/// Image popup plugin, re-bound over the fresh nodes after every page render
pub trait Lightbox {
    fn activate(&mut self, selector: &str) -> Result<(), ViewerError>;
}

impl<F> Lightbox for F
where
    F: FnMut(&str) -> Result<(), ViewerError>,
{
    fn activate(&mut self, selector: &str) -> Result<(), ViewerError> {
        self(selector)
    }
}

/// Lightbox that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLightbox;

impl Lightbox for NoLightbox {
    fn activate(&mut self, _selector: &str) -> Result<(), ViewerError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_receives_selector() {
        let mut seen = Vec::new();
        {
            let mut lightbox = |selector: &str| {
                seen.push(selector.to_string());
                Ok::<(), ViewerError>(())
            };
            lightbox.activate(".gallery").unwrap();
            lightbox.activate(".gallery").unwrap();
        }
        assert_eq!(seen, vec![".gallery", ".gallery"]);
    }

    #[test]
    fn test_no_lightbox() {
        assert!(NoLightbox.activate("anything").is_ok());
    }
}
