//! Farm dashboard aggregates.

use philagri_core::{CropStatus, MachineStatus, Peso, TaskStatus, WorkerStatus};
use rust_decimal::Decimal;

use crate::models::{Crop, Fertilizer, Machine, Task, Worker};

/// Headcount and payroll for the workers page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerSummary {
    pub total: usize,
    pub active: usize,
    pub on_leave: usize,
    /// Sum of every worker's daily rate.
    pub daily_payroll: Peso,
}

#[must_use]
pub fn worker_summary(workers: &[Worker]) -> WorkerSummary {
    WorkerSummary {
        total: workers.len(),
        active: count_workers(workers, WorkerStatus::Active),
        on_leave: count_workers(workers, WorkerStatus::OnLeave),
        daily_payroll: workers.iter().map(|w| w.daily_rate).sum(),
    }
}

fn count_workers(workers: &[Worker], status: WorkerStatus) -> usize {
    workers.iter().filter(|w| w.status == status).count()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropSummary {
    pub total: usize,
    pub growing: usize,
    pub ready: usize,
    /// Planted or growing.
    pub in_field: usize,
    /// Hectares, rounded to one decimal.
    pub total_area: Decimal,
}

#[must_use]
pub fn crop_summary(crops: &[Crop]) -> CropSummary {
    let count = |status: CropStatus| crops.iter().filter(|c| c.status == status).count();
    CropSummary {
        total: crops.len(),
        growing: count(CropStatus::Growing),
        ready: count(CropStatus::Ready),
        in_field: crops.iter().filter(|c| c.status.is_in_field()).count(),
        total_area: crops.iter().map(|c| c.area).sum::<Decimal>().round_dp(1),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineSummary {
    pub total: usize,
    pub available: usize,
    pub in_use: usize,
    pub maintenance: usize,
}

#[must_use]
pub fn machine_summary(machines: &[Machine]) -> MachineSummary {
    let count = |status: MachineStatus| machines.iter().filter(|m| m.status == status).count();
    MachineSummary {
        total: machines.len(),
        available: count(MachineStatus::Available),
        in_use: count(MachineStatus::InUse),
        maintenance: count(MachineStatus::Maintenance),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FertilizerSummary<'a> {
    pub total: usize,
    pub in_stock: usize,
    /// Items below their minimum stock level, in store order.
    pub low_stock: Vec<&'a Fertilizer>,
    /// Σ quantity × unit cost.
    pub inventory_value: Peso,
}

#[must_use]
pub fn fertilizer_summary(fertilizers: &[Fertilizer]) -> FertilizerSummary<'_> {
    let low_stock: Vec<&Fertilizer> = fertilizers.iter().filter(|f| f.is_low_stock()).collect();
    FertilizerSummary {
        total: fertilizers.len(),
        in_stock: fertilizers.len() - low_stock.len(),
        low_stock,
        inventory_value: fertilizers.iter().map(Fertilizer::stock_value).sum(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl TaskSummary {
    /// Pending plus in progress.
    #[must_use]
    pub const fn open(&self) -> usize {
        self.pending + self.in_progress
    }
}

#[must_use]
pub fn task_summary(tasks: &[Task]) -> TaskSummary {
    TaskSummary {
        total: tasks.len(),
        pending: tasks_with_status(tasks, TaskStatus::Pending).len(),
        in_progress: tasks_with_status(tasks, TaskStatus::InProgress).len(),
        completed: tasks_with_status(tasks, TaskStatus::Completed).len(),
    }
}

/// Tasks in exactly `status`, in input order.
#[must_use]
pub fn tasks_with_status(tasks: &[Task], status: TaskStatus) -> Vec<&Task> {
    tasks.iter().filter(|t| t.status == status).collect()
}

/// The first `n` tasks that are not completed.
#[must_use]
pub fn open_tasks(tasks: &[Task], n: usize) -> Vec<&Task> {
    tasks.iter().filter(|t| t.status.is_open()).take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntityStore;

    #[test]
    fn test_worker_summary() {
        let store = EntityStore::seed();
        let summary = worker_summary(store.workers());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.active, 3);
        assert_eq!(summary.on_leave, 1);
        assert_eq!(summary.daily_payroll, Peso::whole(2300));
    }

    #[test]
    fn test_crop_summary() {
        let store = EntityStore::seed();
        let summary = crop_summary(store.crops());
        assert_eq!(summary.growing, 2);
        assert_eq!(summary.ready, 1);
        assert_eq!(summary.in_field, 2);
        assert_eq!(summary.total_area.to_string(), "12.5");
    }

    #[test]
    fn test_machine_summary() {
        let store = EntityStore::seed();
        let summary = machine_summary(store.machines());
        assert_eq!(
            summary,
            MachineSummary {
                total: 4,
                available: 2,
                in_use: 1,
                maintenance: 1,
            }
        );
    }

    #[test]
    fn test_fertilizer_low_stock_and_value() {
        let store = EntityStore::seed();
        let summary = fertilizer_summary(store.fertilizers());
        let low: Vec<&str> = summary.low_stock.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(low, ["f4"]);
        assert_eq!(summary.in_stock, 3);
        // 500*25 + 350*30 + 800*15 + 180*22
        assert_eq!(summary.inventory_value, Peso::whole(38_960));
    }

    #[test]
    fn test_task_summary_and_open_tasks() {
        let store = EntityStore::seed();
        let summary = task_summary(store.tasks());
        assert_eq!((summary.pending, summary.in_progress, summary.completed), (2, 2, 1));
        assert_eq!(summary.open(), 4);

        let open: Vec<&str> = open_tasks(store.tasks(), 3)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(open, ["t2", "t3", "t4"]);
    }
}
