//! Farm management route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
};
use philagri_core::TaskStatus;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::CurrentContext;
use crate::models::{Crop, Fertilizer, Machine, Task, Worker};
use crate::queries::farm::{crop_summary, fertilizer_summary, machine_summary, worker_summary};
use crate::state::AppState;
use crate::views::{FarmOverview, TaskBoard};

use super::cards::{StatCard, TrendRow, whole_pesos};
use super::settle;
use super::shell::{Flash, Shell};

const TASKS_PATH: &str = "/farm/tasks";
const WORKERS_PATH: &str = "/farm/workers";

/// Worker display data for templates.
#[derive(Debug, Clone)]
pub struct WorkerView {
    pub name: String,
    pub position: String,
    pub phone_number: String,
    pub date_hired: String,
    pub status: &'static str,
    pub daily_rate: String,
    pub tasks_completed: u32,
}

impl From<&Worker> for WorkerView {
    fn from(worker: &Worker) -> Self {
        Self {
            name: worker.name.clone(),
            position: worker.position.clone(),
            phone_number: worker.phone_number.clone(),
            date_hired: worker.date_hired.clone(),
            status: worker.status.as_str(),
            daily_rate: worker.daily_rate.display(),
            tasks_completed: worker.tasks_completed,
        }
    }
}

/// Crop display data for templates.
#[derive(Debug, Clone)]
pub struct CropView {
    pub name: String,
    pub variety: String,
    pub planting_date: String,
    pub expected_harvest: String,
    pub area: String,
    pub status: &'static str,
    pub health: &'static str,
    pub location: String,
}

impl From<&Crop> for CropView {
    fn from(crop: &Crop) -> Self {
        Self {
            name: crop.name.clone(),
            variety: crop.variety.clone(),
            planting_date: crop.planting_date.clone(),
            expected_harvest: crop.expected_harvest.clone(),
            area: format!("{} ha", crop.area),
            status: crop.status.as_str(),
            health: crop.health.as_str(),
            location: crop.location.clone(),
        }
    }
}

/// Machine display data for templates.
#[derive(Debug, Clone)]
pub struct MachineView {
    pub name: String,
    pub kind: String,
    pub status: &'static str,
    pub condition: &'static str,
    pub last_maintenance: String,
    pub next_maintenance: String,
}

impl From<&Machine> for MachineView {
    fn from(machine: &Machine) -> Self {
        Self {
            name: machine.name.clone(),
            kind: machine.kind.clone(),
            status: machine.status.as_str(),
            condition: machine.condition.as_str(),
            last_maintenance: machine.last_maintenance.clone(),
            next_maintenance: machine.next_maintenance.clone(),
        }
    }
}

/// Fertilizer display data for templates.
#[derive(Debug, Clone)]
pub struct FertilizerView {
    pub name: String,
    pub kind: String,
    pub stock: String,
    pub minimum: String,
    pub cost: String,
    pub supplier: String,
    pub last_purchase: String,
    pub low_stock: bool,
}

impl From<&Fertilizer> for FertilizerView {
    fn from(fertilizer: &Fertilizer) -> Self {
        Self {
            name: fertilizer.name.clone(),
            kind: fertilizer.kind.clone(),
            stock: format!("{} {}", fertilizer.quantity, fertilizer.unit),
            minimum: format!("{} {}", fertilizer.minimum_stock, fertilizer.unit),
            cost: format!("{}/{}", fertilizer.cost.display(), fertilizer.unit),
            supplier: fertilizer.supplier.clone(),
            last_purchase: fertilizer.last_purchase.clone(),
            low_stock: fertilizer.is_low_stock(),
        }
    }
}

/// The button that moves a task to its next status.
#[derive(Debug, Clone)]
pub struct TaskAction {
    pub to: &'static str,
    pub label: &'static str,
}

/// Task display data for templates.
#[derive(Debug, Clone)]
pub struct TaskView {
    pub id: String,
    pub title: String,
    pub assigned_worker: String,
    pub crop: String,
    pub due_date: String,
    pub status: &'static str,
    pub status_label: &'static str,
    pub priority: &'static str,
    pub action: Option<TaskAction>,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        let action = task.status.next().map(|next| TaskAction {
            to: next.as_str(),
            label: match next {
                TaskStatus::InProgress => "Start Task",
                _ => "Mark Complete",
            },
        });
        Self {
            id: task.id.to_string(),
            title: task.title.clone(),
            assigned_worker: task.assigned_worker.clone(),
            crop: task.crop.clone(),
            due_date: task.due_date.clone(),
            status: task.status.as_str(),
            status_label: task.status.label(),
            priority: task.priority.as_str(),
            action,
        }
    }
}

/// One tab of the task board.
#[derive(Debug, Clone)]
pub struct TaskColumn {
    pub status: &'static str,
    pub label: &'static str,
    pub tasks: Vec<TaskView>,
}

fn views<'a, T: 'a, V>(items: impl IntoIterator<Item = &'a T>) -> Vec<V>
where
    V: From<&'a T>,
{
    items.into_iter().map(V::from).collect()
}

/// Farm dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "farm/dashboard.html")]
pub struct FarmDashboardTemplate {
    pub shell: Shell,
    pub stats: Vec<StatCard>,
    pub open_tasks: Vec<TaskView>,
    pub crops: Vec<CropView>,
    pub harvest: Vec<TrendRow>,
    pub expenses: Vec<TrendRow>,
}

/// Workers page template.
#[derive(Template, WebTemplate)]
#[template(path = "farm/workers.html")]
pub struct WorkersTemplate {
    pub shell: Shell,
    pub stats: Vec<StatCard>,
    pub workers: Vec<WorkerView>,
}

/// Crops page template.
#[derive(Template, WebTemplate)]
#[template(path = "farm/crops.html")]
pub struct CropsTemplate {
    pub shell: Shell,
    pub stats: Vec<StatCard>,
    pub crops: Vec<CropView>,
}

/// Machines page template.
#[derive(Template, WebTemplate)]
#[template(path = "farm/machines.html")]
pub struct MachinesTemplate {
    pub shell: Shell,
    pub stats: Vec<StatCard>,
    pub machines: Vec<MachineView>,
}

/// Fertilizers page template.
#[derive(Template, WebTemplate)]
#[template(path = "farm/fertilizers.html")]
pub struct FertilizersTemplate {
    pub shell: Shell,
    pub stats: Vec<StatCard>,
    pub low_stock_alert: Option<String>,
    pub fertilizers: Vec<FertilizerView>,
}

/// Tasks page template.
#[derive(Template, WebTemplate)]
#[template(path = "farm/tasks.html")]
pub struct TasksTemplate {
    pub shell: Shell,
    pub stats: Vec<StatCard>,
    pub columns: Vec<TaskColumn>,
}

/// Task status update form.
#[derive(Debug, Deserialize)]
pub struct TaskStatusForm {
    pub status: String,
}

/// New worker form. Acknowledged, never stored.
#[derive(Debug, Deserialize)]
pub struct WorkerForm {
    #[serde(default)]
    pub name: String,
}

/// Display the farm dashboard.
#[instrument(skip(current, state))]
pub async fn dashboard(current: CurrentContext, State(state): State<AppState>) -> FarmDashboardTemplate {
    let overview = FarmOverview::from_store(state.store());
    let stats = vec![
        StatCard::new(
            "Active Workers",
            overview.workers.active,
            format!("{} total workers", overview.workers.total),
        ),
        StatCard::new(
            "Growing Crops",
            overview.crops.in_field,
            format!("{} total crop areas", overview.crops.total),
        ),
        StatCard::new(
            "Available Machines",
            overview.machines.available,
            format!("{} total equipment", overview.machines.total),
        ),
        StatCard::new(
            "Pending Tasks",
            overview.tasks.open(),
            format!("{} total tasks", overview.tasks.total),
        ),
    ];

    FarmDashboardTemplate {
        shell: Shell::new(&current.context, "/farm/dashboard"),
        stats,
        open_tasks: views(overview.open_tasks.iter().copied()),
        crops: views(overview.crop_list),
        harvest: views(overview.harvest_trend),
        expenses: views(overview.expense_breakdown),
    }
}

fn workers_page(state: &AppState, shell: Shell) -> WorkersTemplate {
    let workers = state.store().workers();
    let summary = worker_summary(workers);
    WorkersTemplate {
        shell,
        stats: vec![
            StatCard::new("Total Workers", summary.total, ""),
            StatCard::new("Active", summary.active, ""),
            StatCard::new("On Leave", summary.on_leave, ""),
            StatCard::new("Daily Payroll", whole_pesos(summary.daily_payroll), ""),
        ],
        workers: views(workers),
    }
}

/// Display the workers page.
#[instrument(skip(current, state))]
pub async fn workers(current: CurrentContext, State(state): State<AppState>) -> WorkersTemplate {
    workers_page(&state, Shell::new(&current.context, WORKERS_PATH))
}

/// Acknowledge a new worker without storing it.
#[instrument(skip(current, state))]
pub async fn add_worker(
    current: CurrentContext,
    State(state): State<AppState>,
    Form(form): Form<WorkerForm>,
) -> WorkersTemplate {
    tracing::info!(name = %form.name, "Worker form acknowledged");
    let shell = Shell::new(&current.context, WORKERS_PATH)
        .with_flash(Flash::success("Worker added successfully!"));
    workers_page(&state, shell)
}

/// Display the crops page.
#[instrument(skip(current, state))]
pub async fn crops(current: CurrentContext, State(state): State<AppState>) -> CropsTemplate {
    let crops = state.store().crops();
    let summary = crop_summary(crops);
    CropsTemplate {
        shell: Shell::new(&current.context, "/farm/crops"),
        stats: vec![
            StatCard::new("Total Crops", summary.total, ""),
            StatCard::new("Growing", summary.growing, ""),
            StatCard::new("Ready to Harvest", summary.ready, ""),
            StatCard::new("Total Area", format!("{} ha", summary.total_area), ""),
        ],
        crops: views(crops),
    }
}

/// Display the machines page.
#[instrument(skip(current, state))]
pub async fn machines(current: CurrentContext, State(state): State<AppState>) -> MachinesTemplate {
    let machines = state.store().machines();
    let summary = machine_summary(machines);
    MachinesTemplate {
        shell: Shell::new(&current.context, "/farm/machines"),
        stats: vec![
            StatCard::new("Total Equipment", summary.total, ""),
            StatCard::new("Available", summary.available, ""),
            StatCard::new("In Use", summary.in_use, ""),
            StatCard::new("Maintenance", summary.maintenance, ""),
        ],
        machines: views(machines),
    }
}

/// Display the fertilizer inventory.
#[instrument(skip(current, state))]
pub async fn fertilizers(
    current: CurrentContext,
    State(state): State<AppState>,
) -> FertilizersTemplate {
    let fertilizers = state.store().fertilizers();
    let summary = fertilizer_summary(fertilizers);
    let low = summary.low_stock.len();
    let low_stock_alert = (low > 0).then(|| {
        format!(
            "{low} item{} below minimum stock level. Please reorder soon.",
            if low > 1 { "s" } else { "" }
        )
    });

    FertilizersTemplate {
        shell: Shell::new(&current.context, "/farm/fertilizers"),
        stats: vec![
            StatCard::new("Total Items", summary.total, ""),
            StatCard::new("In Stock", summary.in_stock, ""),
            StatCard::new("Low Stock", low, ""),
            StatCard::new("Inventory Value", whole_pesos(summary.inventory_value), ""),
        ],
        low_stock_alert,
        fertilizers: views(fertilizers),
    }
}

fn tasks_page(board: &TaskBoard, shell: Shell) -> TasksTemplate {
    let summary = board.summary();
    TasksTemplate {
        shell,
        stats: vec![
            StatCard::new("Total Tasks", summary.total, ""),
            StatCard::new("Pending", summary.pending, ""),
            StatCard::new("In Progress", summary.in_progress, ""),
            StatCard::new("Completed", summary.completed, ""),
        ],
        columns: TaskStatus::ALL
            .iter()
            .map(|status| TaskColumn {
                status: status.as_str(),
                label: status.label(),
                tasks: views(board.column(*status)),
            })
            .collect(),
    }
}

/// Display the task board.
#[instrument(skip(current, state))]
pub async fn tasks(current: CurrentContext, State(state): State<AppState>) -> TasksTemplate {
    let board = TaskBoard::from_store(state.store());
    tasks_page(&board, Shell::new(&current.context, TASKS_PATH))
}

/// Move one task along its lifecycle and render the board once.
#[instrument(skip(current, state))]
pub async fn update_task_status(
    current: CurrentContext,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<TaskStatusForm>,
) -> Result<TasksTemplate> {
    let to: TaskStatus = form.status.parse().map_err(AppError::BadRequest)?;
    let fresh = || TaskBoard::from_store(state.store());
    let (board, flash) = settle(fresh().update_status(&id, to), fresh, || {
        format!("Task updated to {to}")
    })?;
    Ok(tasks_page(
        &board,
        Shell::new(&current.context, TASKS_PATH).with_flash(flash),
    ))
}
