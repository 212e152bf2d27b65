use crate::{event::Direction, Result, SwipeError};
use serde::Deserialize;
use std::fmt;

/// Called with the direction of every completed swipe.
pub type DropCallback = Box<dyn FnMut(Direction)>;

pub const DEFAULT_SELECTOR: &str = ".swipe";
pub const DEFAULT_DROP_DISTANCE: f32 = 100.0;

/// Resolved configuration of a [`crate::SwipeController`]. Fixed once the controller is initialized.
pub struct SwipeSettings {
    /// Selector of the container whose children form the stack.
    pub selector: String,
    pub drop_callback: DropCallback,
    /// Horizontal distance in points the pointer must travel for a release to count as a swipe.
    pub drop_distance: f32,
    /// Whether the dragged element follows the pointer vertically as well.
    pub y_enabled: bool,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_owned(),
            drop_callback: Box::new(|direction| tracing::info!("{direction}")),
            drop_distance: DEFAULT_DROP_DISTANCE,
            y_enabled: true,
        }
    }
}

impl fmt::Debug for SwipeSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeSettings")
            .field("selector", &self.selector)
            .field("drop_distance", &self.drop_distance)
            .field("y_enabled", &self.y_enabled)
            .finish_non_exhaustive()
    }
}

impl SwipeSettings {
    /// Defaults with `selector` and then `options` layered on top. A selector given in `options`
    /// wins over the `selector` argument.
    pub fn resolve(selector: Option<&str>, options: SwipeOptions) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(selector) = selector {
            settings.selector = selector.to_owned();
        }
        settings.apply(options)?;
        Ok(settings)
    }

    /// Overwrites every field `options` sets. Leaves `self` untouched if the options are invalid.
    pub fn apply(&mut self, options: SwipeOptions) -> Result<()> {
        if let Some(drop_distance) = options.drop_distance {
            // NaN fails this comparison too
            if !(drop_distance >= 0.0) {
                return Err(SwipeError::InvalidDropDistance(drop_distance));
            }
            self.drop_distance = drop_distance;
        }
        if let Some(selector) = options.selector {
            self.selector = selector;
        }
        if let Some(drop_callback) = options.drop_callback {
            self.drop_callback = drop_callback;
        }
        if let Some(y_enabled) = options.y_enabled {
            self.y_enabled = y_enabled;
        }
        Ok(())
    }
}

/// Caller supplied overrides for [`SwipeSettings`]. Every field left `None` keeps its default.
///
/// Everything except the callback can also be read from TOML:
///
/// ```rust
/// use egui_swipe::SwipeOptions;
///
/// let options = SwipeOptions::from_toml_str(
///     r#"
///     selector = ".cards"
///     drop_distance = 80.0
///     y_enabled = false
///     "#,
/// )
/// .unwrap();
/// assert_eq!(options.drop_distance, Some(80.0));
/// ```
#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwipeOptions {
    pub selector: Option<String>,
    #[serde(skip)]
    pub drop_callback: Option<DropCallback>,
    pub drop_distance: Option<f32>,
    pub y_enabled: Option<bool>,
}

impl SwipeOptions {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn with_drop_callback(mut self, drop_callback: impl FnMut(Direction) + 'static) -> Self {
        self.drop_callback = Some(Box::new(drop_callback));
        self
    }

    pub fn with_drop_distance(mut self, drop_distance: f32) -> Self {
        self.drop_distance = Some(drop_distance);
        self
    }

    pub fn with_y_enabled(mut self, y_enabled: bool) -> Self {
        self.y_enabled = Some(y_enabled);
        self
    }
}

impl fmt::Debug for SwipeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeOptions")
            .field("selector", &self.selector)
            .field("drop_callback", &self.drop_callback.is_some())
            .field("drop_distance", &self.drop_distance)
            .field("y_enabled", &self.y_enabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = SwipeSettings::default();
        assert_eq!(settings.selector, ".swipe");
        assert_eq!(settings.drop_distance, 100.0);
        assert!(settings.y_enabled);
    }

    #[test]
    fn options_selector_beats_argument() {
        let settings = SwipeSettings::resolve(Some("#arg"), SwipeOptions::default()).unwrap();
        assert_eq!(settings.selector, "#arg");

        let options = SwipeOptions::default().with_selector("#option");
        let settings = SwipeSettings::resolve(Some("#arg"), options).unwrap();
        assert_eq!(settings.selector, "#option");
    }

    #[test]
    fn unset_options_keep_defaults() {
        let options = SwipeOptions::default().with_y_enabled(false);
        let settings = SwipeSettings::resolve(None, options).unwrap();
        assert!(!settings.y_enabled);
        assert_eq!(settings.drop_distance, DEFAULT_DROP_DISTANCE);
        assert_eq!(settings.selector, DEFAULT_SELECTOR);
    }

    #[test]
    fn negative_or_nan_drop_distance_is_rejected() {
        for bad in [-1.0, f32::NAN] {
            let options = SwipeOptions::default().with_drop_distance(bad);
            let err = SwipeSettings::resolve(None, options).unwrap_err();
            assert!(matches!(err, SwipeError::InvalidDropDistance(_)));
        }
    }

    #[test]
    fn zero_drop_distance_is_allowed() {
        let options = SwipeOptions::default().with_drop_distance(0.0);
        assert_eq!(SwipeSettings::resolve(None, options).unwrap().drop_distance, 0.0);
    }

    #[test]
    fn toml_options() {
        let options = SwipeOptions::from_toml_str("y_enabled = false\n").unwrap();
        assert_eq!(options.y_enabled, Some(false));
        assert!(options.selector.is_none());
        assert!(options.drop_callback.is_none());
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        let err = SwipeOptions::from_toml_str("dropDistance = 5.0\n").unwrap_err();
        assert!(matches!(err, SwipeError::Config(_)));
    }
}
