//! Seed fixtures for the entity store.

use philagri_core::{
    CropHealth, CropStatus, MachineCondition, MachineStatus, OrderStatus, Peso, Role,
    TaskPriority, TaskStatus, WorkerStatus,
};
use rust_decimal::Decimal;

use crate::models::{
    Crop, ExpensePoint, Fertilizer, HarvestPoint, Machine, Message, Order, Product, Review,
    SalesPoint, Task, User, Worker,
};

/// One-decimal value from tenths (`tenths(48)` is 4.8).
fn tenths(value: i64) -> Decimal {
    Decimal::new(value, 1)
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    category: &str,
    (price, quantity, unit): (u32, u32, &str),
    description: &str,
    image: &str,
    (seller_id, seller_name): (&str, &str),
    location: &str,
    (rating, review_count): (i64, u32),
) -> Product {
    Product {
        id: id.into(),
        name: name.to_owned(),
        category: category.to_owned(),
        price: Peso::whole(price),
        quantity,
        unit: unit.to_owned(),
        description: description.to_owned(),
        image: image.to_owned(),
        seller_id: seller_id.into(),
        seller_name: seller_name.to_owned(),
        location: location.to_owned(),
        rating: tenths(rating),
        review_count,
        available: true,
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Premium Rice (Sinandomeng)",
            "Rice & Grains",
            (50, 5000, "kg"),
            "High-quality Sinandomeng rice from Nueva Ecija. Freshly harvested, clean and aromatic.",
            "https://images.unsplash.com/photo-1586201375761-83865001e31c?w=400",
            ("s1", "Gonzales Farm"),
            "Nueva Ecija",
            (48, 234),
        ),
        product(
            "2",
            "Fresh Carabao Mango",
            "Fruits",
            (120, 800, "kg"),
            "Sweet and juicy Carabao mangoes from Guimaras. Export quality, perfect for eating fresh.",
            "https://images.unsplash.com/photo-1553279768-865429fa0078?w=400",
            ("s2", "Santos Mango Plantation"),
            "Guimaras",
            (49, 312),
        ),
        product(
            "3",
            "Organic Tomatoes",
            "Vegetables",
            (40, 1500, "kg"),
            "Fresh organic tomatoes from Benguet highlands. Perfect for cooking and salads.",
            "https://images.unsplash.com/photo-1546094096-0df4bcaaa337?w=400",
            ("s3", "Benguet Veggie Hub"),
            "Benguet",
            (47, 189),
        ),
        product(
            "4",
            "Coconut (Buko)",
            "Fruits",
            (30, 2000, "pcs"),
            "Fresh young coconuts from Laguna. Sweet water and soft meat, harvested daily.",
            "https://images.unsplash.com/photo-1604368099874-4b1e71d0cd5e?w=400",
            ("s1", "Gonzales Farm"),
            "Laguna",
            (46, 156),
        ),
        product(
            "5",
            "Pechay (Bok Choy)",
            "Vegetables",
            (35, 800, "kg"),
            "Fresh pechay from Baguio. Crisp and green, perfect for Filipino dishes.",
            "https://images.unsplash.com/photo-1580471846556-48ee5e97bc82?w=400",
            ("s3", "Benguet Veggie Hub"),
            "Baguio",
            (45, 98),
        ),
        product(
            "6",
            "Free Range Eggs (Itlog)",
            "Poultry & Eggs",
            (180, 500, "tray"),
            "Farm-fresh free-range eggs. Rich orange yolks, from happy chickens in Batangas.",
            "https://images.unsplash.com/photo-1518569656558-1f25e69d93d7?w=400",
            ("s4", "Reyes Poultry Farm"),
            "Batangas",
            (49, 267),
        ),
        product(
            "7",
            "Saba Banana",
            "Fruits",
            (45, 1200, "kg"),
            "Fresh saba bananas from Mindanao. Perfect for banana-cue, turon, or cooking.",
            "https://images.unsplash.com/photo-1603052875655-c582a8dc3b80?w=400",
            ("s5", "Mindanao Harvest"),
            "Davao del Sur",
            (48, 201),
        ),
        product(
            "8",
            "Native Chicken (Manok)",
            "Poultry & Eggs",
            (220, 150, "kg"),
            "Free-range native chicken from Bulacan. Perfect for tinola and other Filipino dishes.",
            "https://images.unsplash.com/photo-1548550023-2bdb3c5beed7?w=400",
            ("s4", "Reyes Poultry Farm"),
            "Bulacan",
            (50, 178),
        ),
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "o1".into(),
            product_id: "1".into(),
            product_name: "Premium Rice (Sinandomeng)".to_owned(),
            buyer_id: "b1".into(),
            buyer_name: "Maria Santos".to_owned(),
            seller_id: "s1".into(),
            seller_name: "Gonzales Farm".to_owned(),
            quantity: 100,
            total_price: Peso::whole(5000),
            status: OrderStatus::Shipped,
            order_date: "2026-02-20".to_owned(),
            delivery_date: Some("2026-02-27".to_owned()),
            tracking_number: Some("PH-TRK-123456".to_owned()),
        },
        Order {
            id: "o2".into(),
            product_id: "2".into(),
            product_name: "Fresh Carabao Mango".to_owned(),
            buyer_id: "b2".into(),
            buyer_name: "Juan dela Cruz".to_owned(),
            seller_id: "s2".into(),
            seller_name: "Santos Mango Plantation".to_owned(),
            quantity: 50,
            total_price: Peso::whole(6000),
            status: OrderStatus::Confirmed,
            order_date: "2026-02-22".to_owned(),
            delivery_date: None,
            tracking_number: None,
        },
        Order {
            id: "o3".into(),
            product_id: "6".into(),
            product_name: "Free Range Eggs (Itlog)".to_owned(),
            buyer_id: "b1".into(),
            buyer_name: "Maria Santos".to_owned(),
            seller_id: "s4".into(),
            seller_name: "Reyes Poultry Farm".to_owned(),
            quantity: 20,
            total_price: Peso::whole(3600),
            status: OrderStatus::Delivered,
            order_date: "2026-02-15".to_owned(),
            delivery_date: Some("2026-02-18".to_owned()),
            tracking_number: None,
        },
    ]
}

fn message(
    id: &str,
    from: (&str, &str),
    to: (&str, &str),
    content: &str,
    timestamp: &str,
    read: bool,
) -> Message {
    Message {
        id: id.into(),
        sender_id: from.0.into(),
        sender_name: from.1.to_owned(),
        receiver_id: to.0.into(),
        receiver_name: to.1.to_owned(),
        content: content.to_owned(),
        timestamp: timestamp.to_owned(),
        read,
    }
}

pub fn messages() -> Vec<Message> {
    let buyer = ("b1", "Maria Santos");
    let seller = ("s1", "Gonzales Farm");
    vec![
        message(
            "m1",
            buyer,
            seller,
            "Good day! Available pa po ba yung rice? Need ko ng 100kg.",
            "2026-02-24T10:30:00",
            true,
        ),
        message(
            "m2",
            seller,
            buyer,
            "Yes po, meron pa kami! Fresh harvest. Kailan po ninyo kailangan?",
            "2026-02-24T11:00:00",
            true,
        ),
        message(
            "m3",
            buyer,
            seller,
            "This week po sana. May delivery ba kayo to Metro Manila?",
            "2026-02-24T11:15:00",
            false,
        ),
    ]
}

pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: "r1".into(),
            product_id: "1".into(),
            seller_id: "s1".into(),
            buyer_id: "b1".into(),
            buyer_name: "Maria Santos".to_owned(),
            rating: 5,
            comment: "Excellent quality rice! Very fresh and aromatic. Highly recommended!"
                .to_owned(),
            date: "2026-02-18".to_owned(),
        },
        Review {
            id: "r2".into(),
            product_id: "2".into(),
            seller_id: "s2".into(),
            buyer_id: "b2".into(),
            buyer_name: "Juan dela Cruz".to_owned(),
            rating: 5,
            comment: "Best mangoes! Super sweet and juicy. Will order again!".to_owned(),
            date: "2026-02-20".to_owned(),
        },
    ]
}

pub fn user() -> User {
    User {
        id: "u1".into(),
        name: "Demo User".to_owned(),
        email: "demo@farmph.com".to_owned(),
        role: Role::FarmOwner,
        location: "Pampanga, Philippines".to_owned(),
        phone: "+63 917 123 4567".to_owned(),
        verified: true,
        join_date: "2025-01-15".to_owned(),
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100".to_owned(),
    }
}

fn worker(
    id: &str,
    name: &str,
    position: &str,
    phone_number: &str,
    date_hired: &str,
    status: WorkerStatus,
    (daily_rate, tasks_completed): (u32, u32),
) -> Worker {
    Worker {
        id: id.into(),
        name: name.to_owned(),
        position: position.to_owned(),
        phone_number: phone_number.to_owned(),
        date_hired: date_hired.to_owned(),
        status,
        daily_rate: Peso::whole(daily_rate),
        tasks_completed,
    }
}

pub fn workers() -> Vec<Worker> {
    vec![
        worker(
            "w1",
            "Pedro Martinez",
            "Farm Supervisor",
            "+63 918 234 5678",
            "2023-05-15",
            WorkerStatus::Active,
            (650, 245),
        ),
        worker(
            "w2",
            "Rosa Garcia",
            "Harvester",
            "+63 919 345 6789",
            "2024-01-10",
            WorkerStatus::Active,
            (500, 189),
        ),
        worker(
            "w3",
            "Jose Reyes",
            "Tractor Operator",
            "+63 920 456 7890",
            "2023-08-20",
            WorkerStatus::Active,
            (600, 312),
        ),
        worker(
            "w4",
            "Linda Cruz",
            "Planting Specialist",
            "+63 921 567 8901",
            "2024-03-01",
            WorkerStatus::OnLeave,
            (550, 156),
        ),
    ]
}

fn crop(
    id: &str,
    (name, variety): (&str, &str),
    (planting_date, expected_harvest): (&str, &str),
    area_tenths: i64,
    status: CropStatus,
    health: CropHealth,
    location: &str,
) -> Crop {
    Crop {
        id: id.into(),
        name: name.to_owned(),
        variety: variety.to_owned(),
        planting_date: planting_date.to_owned(),
        expected_harvest: expected_harvest.to_owned(),
        area: tenths(area_tenths),
        status,
        health,
        location: location.to_owned(),
    }
}

pub fn crops() -> Vec<Crop> {
    vec![
        crop(
            "c1",
            ("Rice", "Sinandomeng"),
            ("2025-12-01", "2026-03-15"),
            55,
            CropStatus::Growing,
            CropHealth::Excellent,
            "Field A",
        ),
        crop(
            "c2",
            ("Corn", "Yellow Sweet Corn"),
            ("2026-01-15", "2026-04-20"),
            32,
            CropStatus::Growing,
            CropHealth::Good,
            "Field B",
        ),
        crop(
            "c3",
            ("Tomatoes", "Roma Tomato"),
            ("2025-11-10", "2026-02-28"),
            18,
            CropStatus::Ready,
            CropHealth::Excellent,
            "Greenhouse 1",
        ),
        crop(
            "c4",
            ("Eggplant (Talong)", "Black Beauty"),
            ("2025-10-05", "2026-02-15"),
            20,
            CropStatus::Harvested,
            CropHealth::Excellent,
            "Field C",
        ),
    ]
}

fn machine(
    id: &str,
    (name, kind): (&str, &str),
    status: MachineStatus,
    (last_maintenance, next_maintenance): (&str, &str),
    condition: MachineCondition,
) -> Machine {
    Machine {
        id: id.into(),
        name: name.to_owned(),
        kind: kind.to_owned(),
        status,
        last_maintenance: last_maintenance.to_owned(),
        next_maintenance: next_maintenance.to_owned(),
        condition,
    }
}

pub fn machines() -> Vec<Machine> {
    vec![
        machine(
            "m1",
            ("Kubota Tractor M7040", "Tractor"),
            MachineStatus::Available,
            ("2026-01-15", "2026-04-15"),
            MachineCondition::Excellent,
        ),
        machine(
            "m2",
            ("Rice Harvester", "Harvester"),
            MachineStatus::InUse,
            ("2025-12-20", "2026-03-20"),
            MachineCondition::Good,
        ),
        machine(
            "m3",
            ("Water Pump System", "Irrigation"),
            MachineStatus::Available,
            ("2026-02-01", "2026-05-01"),
            MachineCondition::Excellent,
        ),
        machine(
            "m4",
            ("Hand Tractor", "Tractor"),
            MachineStatus::Maintenance,
            ("2026-02-20", "2026-03-05"),
            MachineCondition::Fair,
        ),
    ]
}

fn fertilizer(
    id: &str,
    (name, kind): (&str, &str),
    (quantity, unit): (u32, &str),
    cost: u32,
    supplier: &str,
    last_purchase: &str,
    minimum_stock: u32,
) -> Fertilizer {
    Fertilizer {
        id: id.into(),
        name: name.to_owned(),
        kind: kind.to_owned(),
        quantity,
        unit: unit.to_owned(),
        cost: Peso::whole(cost),
        supplier: supplier.to_owned(),
        last_purchase: last_purchase.to_owned(),
        minimum_stock,
    }
}

pub fn fertilizers() -> Vec<Fertilizer> {
    vec![
        fertilizer(
            "f1",
            ("Urea (46-0-0)", "Nitrogen Fertilizer"),
            (500, "kg"),
            25,
            "Planters Products Inc.",
            "2026-02-01",
            200,
        ),
        fertilizer(
            "f2",
            ("Complete (14-14-14)", "NPK Fertilizer"),
            (350, "kg"),
            30,
            "Atlas Fertilizer",
            "2026-01-20",
            150,
        ),
        fertilizer(
            "f3",
            ("Organic Compost", "Organic Fertilizer"),
            (800, "kg"),
            15,
            "Local Supplier",
            "2026-02-10",
            300,
        ),
        fertilizer(
            "f4",
            ("Ammonium Sulfate", "Nitrogen Fertilizer"),
            (180, "kg"),
            22,
            "Planters Products Inc.",
            "2026-01-25",
            200,
        ),
    ]
}

fn task(
    id: &str,
    title: &str,
    (assigned_to, assigned_worker): (&str, &str),
    crop: &str,
    due_date: &str,
    status: TaskStatus,
    priority: TaskPriority,
) -> Task {
    Task {
        id: id.into(),
        title: title.to_owned(),
        assigned_to: assigned_to.into(),
        assigned_worker: assigned_worker.to_owned(),
        crop: crop.to_owned(),
        due_date: due_date.to_owned(),
        status,
        priority,
    }
}

pub fn tasks() -> Vec<Task> {
    let pedro = ("w1", "Pedro Martinez");
    let rosa = ("w2", "Rosa Garcia");
    let jose = ("w3", "Jose Reyes");
    vec![
        task(
            "t1",
            "Irrigate Rice Field A",
            pedro,
            "Rice - Sinandomeng",
            "2026-02-28",
            TaskStatus::Completed,
            TaskPriority::High,
        ),
        task(
            "t2",
            "Apply Fertilizer to Corn Field",
            rosa,
            "Corn - Yellow Sweet Corn",
            "2026-03-01",
            TaskStatus::InProgress,
            TaskPriority::High,
        ),
        task(
            "t3",
            "Harvest Tomatoes from Greenhouse",
            rosa,
            "Tomatoes - Roma",
            "2026-02-28",
            TaskStatus::InProgress,
            TaskPriority::High,
        ),
        task(
            "t4",
            "Plow Field C for Next Planting",
            jose,
            "Preparation",
            "2026-03-05",
            TaskStatus::Pending,
            TaskPriority::Medium,
        ),
        task(
            "t5",
            "Check Irrigation System",
            pedro,
            "General Maintenance",
            "2026-03-02",
            TaskStatus::Pending,
            TaskPriority::Medium,
        ),
    ]
}

pub fn harvest_trend() -> Vec<HarvestPoint> {
    [
        ("Sep", 2500),
        ("Oct", 3200),
        ("Nov", 2800),
        ("Dec", 3500),
        ("Jan", 4200),
        ("Feb", 3800),
    ]
    .into_iter()
    .map(|(month, harvest)| HarvestPoint {
        month: month.to_owned(),
        harvest,
    })
    .collect()
}

pub fn expense_breakdown() -> Vec<ExpensePoint> {
    [
        ("Fertilizers", 45_000),
        ("Labor", 78_000),
        ("Equipment", 32_000),
        ("Seeds", 25_000),
        ("Utilities", 18_000),
    ]
    .into_iter()
    .map(|(category, amount)| ExpensePoint {
        category: category.to_owned(),
        amount: Peso::whole(amount),
    })
    .collect()
}

pub fn sales_trend() -> Vec<SalesPoint> {
    [
        ("Jan", 4200, 45),
        ("Feb", 5100, 58),
        ("Mar", 4800, 52),
        ("Apr", 6200, 67),
        ("May", 7500, 82),
        ("Jun", 8200, 91),
    ]
    .into_iter()
    .map(|(month, revenue, orders)| SalesPoint {
        month: month.to_owned(),
        revenue: Peso::whole(revenue),
        orders,
    })
    .collect()
}
