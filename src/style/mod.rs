use gpui::{FontWeight, Hsla, SharedString, hsla};

#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: Option<SharedString>,
    pub size: f32,
    pub weight: FontWeight,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: None,
            size: 22.0,
            weight: FontWeight::MEDIUM,
        }
    }
}

impl FontSpec {
    pub fn new(size: f32) -> Self {
        Self {
            size: sanitize_px(size),
            ..Self::default()
        }
    }

    pub fn family(mut self, value: impl Into<SharedString>) -> Self {
        self.family = Some(value.into());
        self
    }

    pub fn weight(mut self, value: FontWeight) -> Self {
        self.weight = value;
        self
    }
}

/// Visual bundle applied uniformly to every slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Appearance {
    pub font: FontSpec,
    pub text_color: Hsla,
    pub background_color: Hsla,
    pub caret_color: Hsla,
}

impl Appearance {
    pub fn new(
        font: FontSpec,
        text_color: Hsla,
        background_color: Hsla,
        caret_color: Hsla,
    ) -> Self {
        Self {
            font,
            text_color,
            background_color,
            caret_color,
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            font: FontSpec::default(),
            text_color: hsla(0.0, 0.0, 0.1, 1.0),
            background_color: hsla(0.0, 0.0, 0.94, 1.0),
            caret_color: hsla(0.59, 0.9, 0.5, 1.0),
        }
    }
}

/// Geometry shared by the slot row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotLayout {
    pub spacing: f32,
    pub corner_radius: f32,
    pub slot_height: f32,
    pub caret_width: f32,
    pub caret_height_ratio: f32,
}

impl Default for SlotLayout {
    fn default() -> Self {
        Self {
            spacing: 8.0,
            corner_radius: 8.0,
            slot_height: 48.0,
            caret_width: 2.0,
            caret_height_ratio: 0.6,
        }
    }
}

impl SlotLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spacing(mut self, value: f32) -> Self {
        self.spacing = sanitize_px(value);
        self
    }

    pub fn corner_radius(mut self, value: f32) -> Self {
        self.corner_radius = sanitize_px(value);
        self
    }

    pub fn slot_height(mut self, value: f32) -> Self {
        self.slot_height = sanitize_px(value);
        self
    }

    pub fn caret_width(mut self, value: f32) -> Self {
        self.caret_width = sanitize_px(value);
        self
    }

    pub fn caret_height_ratio(mut self, value: f32) -> Self {
        self.caret_height_ratio = if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    pub fn caret_height(&self) -> f32 {
        self.slot_height * self.caret_height_ratio
    }

    /// Top offset that centers the caret vertically inside a slot.
    pub fn caret_top(&self) -> f32 {
        (self.slot_height - self.caret_height()) / 2.0
    }
}

fn sanitize_px(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
