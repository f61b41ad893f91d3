//! Container sizing constraints and resolution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use flowrow_core::geometry::{Insets, Size, clamp_non_negative};

/// How the container resolves its extent on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SizeMode {
    /// The host fixes the extent.
    Exact(i32),
    /// Content extent plus padding, but never below `min`.
    Natural { min: i32 },
}

impl SizeMode {
    /// Natural sizing without a minimum.
    pub const NATURAL: Self = Self::Natural { min: 0 };

    /// Resolve the extent for a content extent and the padding on this axis.
    #[must_use]
    pub const fn resolve(self, content: i32, padding: i32) -> i32 {
        match self {
            Self::Exact(value) => clamp_non_negative(value),
            Self::Natural { min } => {
                let natural = content.saturating_add(padding);
                if natural < min { min } else { natural }
            }
        }
    }
}

impl Default for SizeMode {
    fn default() -> Self {
        Self::NATURAL
    }
}

/// The box the host offers to the flow container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    /// Outer width available for the container, padding included.
    pub available_width: i32,
    pub padding: Insets,
    pub width: SizeMode,
    pub height: SizeMode,
}

impl Container {
    /// A container whose outer size is fixed by the host.
    #[must_use]
    pub const fn exact(width: i32, height: i32) -> Self {
        Self {
            available_width: width,
            padding: Insets::ZERO,
            width: SizeMode::Exact(width),
            height: SizeMode::Exact(height),
        }
    }

    /// A container that wraps at `available_width` and sizes itself to its
    /// content on both axes.
    #[must_use]
    pub const fn natural(available_width: i32) -> Self {
        Self {
            available_width,
            padding: Insets::ZERO,
            width: SizeMode::NATURAL,
            height: SizeMode::NATURAL,
        }
    }

    /// Set the padding (negative sides clamp to 0).
    #[must_use]
    pub const fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding.clamped();
        self
    }

    /// Set the minimum size for naturally sized axes.
    #[must_use]
    pub const fn with_min_size(mut self, min: Size) -> Self {
        if let SizeMode::Natural { .. } = self.width {
            self.width = SizeMode::Natural { min: min.width };
        }
        if let SizeMode::Natural { .. } = self.height {
            self.height = SizeMode::Natural { min: min.height };
        }
        self
    }

    /// Width rows may fill before they wrap.
    #[must_use]
    pub const fn content_width_limit(&self) -> i32 {
        clamp_non_negative(
            self.available_width
                .saturating_sub(self.padding.clamped().horizontal_sum()),
        )
    }

    /// Resolve the container's outer size for a content size.
    #[must_use]
    pub const fn resolve(&self, content: Size) -> Size {
        let padding = self.padding.clamped();
        Size::new(
            self.width.resolve(content.width, padding.horizontal_sum()),
            self.height.resolve(content.height, padding.vertical_sum()),
        )
    }
}

/// Whether the host should show the container after a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContainerVisibility {
    Show,
    /// A zero-width or zero-height container; hide it so its padding does not
    /// leave a blank band.
    Collapse,
}

impl ContainerVisibility {
    /// Visibility signal for a resolved size.
    #[must_use]
    pub const fn for_size(size: Size) -> Self {
        if size.is_empty() {
            Self::Collapse
        } else {
            Self::Show
        }
    }
}
