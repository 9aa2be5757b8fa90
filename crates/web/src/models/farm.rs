//! Farm-operational records.

use philagri_core::{
    CropHealth, CropId, CropStatus, FertilizerId, MachineCondition, MachineId, MachineStatus,
    Peso, TaskId, TaskPriority, TaskStatus, WorkerId, WorkerStatus,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub position: String,
    pub phone_number: String,
    pub date_hired: String,
    pub status: WorkerStatus,
    pub daily_rate: Peso,
    pub tasks_completed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    pub id: CropId,
    pub name: String,
    pub variety: String,
    pub planting_date: String,
    pub expected_harvest: String,
    /// Planted area in hectares.
    pub area: Decimal,
    pub status: CropStatus,
    pub health: CropHealth,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub id: MachineId,
    pub name: String,
    pub kind: String,
    pub status: MachineStatus,
    pub last_maintenance: String,
    pub next_maintenance: String,
    pub condition: MachineCondition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fertilizer {
    pub id: FertilizerId,
    pub name: String,
    pub kind: String,
    pub quantity: u32,
    pub unit: String,
    /// Cost per `unit`.
    pub cost: Peso,
    pub supplier: String,
    pub last_purchase: String,
    pub minimum_stock: u32,
}

impl Fertilizer {
    /// Stock has dropped below the reorder threshold.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.quantity < self.minimum_stock
    }

    /// Value of the stock on hand.
    #[must_use]
    pub fn stock_value(&self) -> Peso {
        self.cost.times(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub assigned_to: WorkerId,
    pub assigned_worker: String,
    pub crop: String,
    pub due_date: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}
