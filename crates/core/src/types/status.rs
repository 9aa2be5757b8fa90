//! Status and priority enums for marketplace and farm entities.
//!
//! Order and task lifecycles are the only statuses that views change, and the
//! allowed moves are defined once here:
//!
//! ```text
//! Order:  pending -> confirmed -> shipped -> delivered
//!         pending -> cancelled
//! Task:   pending -> in-progress -> completed
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Implements `as_str`, `Display` and `FromStr` from one wire-name table.
macro_rules! wire_names {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire value as stored in the seed data.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(format!(concat!("invalid ", stringify!($name), ": {}"), s)),
                }
            }
        }
    };
}

/// A status change that the lifecycle does not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot move {entity} from {from} to {to}")]
pub struct TransitionError {
    pub entity: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

/// Order fulfilment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

wire_names!(OrderStatus {
    Pending => "pending",
    Confirmed => "confirmed",
    Shipped => "shipped",
    Delivered => "delivered",
    Cancelled => "cancelled",
});

impl OrderStatus {
    /// Statuses reachable in one step from `self`.
    #[must_use]
    pub const fn next_steps(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Confirmed, Self::Cancelled],
            Self::Confirmed => &[Self::Shipped],
            Self::Shipped => &[Self::Delivered],
            Self::Delivered | Self::Cancelled => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, to: Self) -> bool {
        self.next_steps().contains(&to)
    }

    /// Check a move against the lifecycle table.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` if `to` is not a direct successor of `self`.
    pub fn transition_to(self, to: Self) -> Result<Self, TransitionError> {
        if self.can_transition_to(to) {
            Ok(to)
        } else {
            Err(TransitionError {
                entity: "order",
                from: self.as_str(),
                to: to.as_str(),
            })
        }
    }

    /// Progress bar percentage shown on buyer order cards.
    #[must_use]
    pub const fn progress(self) -> u8 {
        match self {
            Self::Pending => 25,
            Self::Confirmed => 50,
            Self::Shipped => 75,
            Self::Delivered => 100,
            Self::Cancelled => 0,
        }
    }

    /// Still moving through fulfilment.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed | Self::Shipped)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

/// Farm task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

wire_names!(TaskStatus {
    Pending => "pending",
    InProgress => "in-progress",
    Completed => "completed",
});

impl TaskStatus {
    /// The single status reachable from `self`, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::InProgress),
            Self::InProgress => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    /// Check a move against the lifecycle table.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` unless `to` is the direct successor of `self`.
    pub fn transition_to(self, to: Self) -> Result<Self, TransitionError> {
        match self.next() {
            Some(next) if next == to => Ok(to),
            _ => Err(TransitionError {
                entity: "task",
                from: self.as_str(),
                to: to.as_str(),
            }),
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Completed)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

wire_names!(TaskPriority {
    Low => "low",
    Medium => "medium",
    High => "high",
});

/// Farm worker employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkerStatus {
    Active,
    Inactive,
    OnLeave,
}

wire_names!(WorkerStatus {
    Active => "active",
    Inactive => "inactive",
    OnLeave => "on-leave",
});

/// Crop growth stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropStatus {
    Planted,
    Growing,
    Ready,
    Harvested,
}

wire_names!(CropStatus {
    Planted => "planted",
    Growing => "growing",
    Ready => "ready",
    Harvested => "harvested",
});

impl CropStatus {
    /// Planted or growing, i.e. still in the field.
    #[must_use]
    pub const fn is_in_field(self) -> bool {
        matches!(self, Self::Planted | Self::Growing)
    }
}

/// Crop health assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CropHealth {
    Excellent,
    Good,
    NeedsAttention,
}

wire_names!(CropHealth {
    Excellent => "excellent",
    Good => "good",
    NeedsAttention => "needs-attention",
});

/// Machine availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MachineStatus {
    Available,
    InUse,
    Maintenance,
}

wire_names!(MachineStatus {
    Available => "available",
    InUse => "in-use",
    Maintenance => "maintenance",
});

/// Machine physical condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineCondition {
    Excellent,
    Good,
    Fair,
    Poor,
}

wire_names!(MachineCondition {
    Excellent => "excellent",
    Good => "good",
    Fair => "fair",
    Poor => "poor",
});
