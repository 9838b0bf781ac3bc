//! Startup seeding of demo rows.
//!
//! Clients are only inserted into an empty table; developers are upserted
//! by email so repeated starts refresh rather than duplicate them. Failures
//! here are reported to the caller, which logs and continues -- demo data
//! must never prevent the server from starting.

use crate::models::client::NewClient;
use crate::models::developer::NewDeveloper;
use crate::repositories::{ClientRepo, DeveloperRepo};
use crate::DbPool;

/// Seed both tables. Idempotent across restarts.
pub async fn run(pool: &DbPool) -> Result<(), sqlx::Error> {
    seed_clients(pool).await?;
    seed_developers(pool).await
}

async fn seed_clients(pool: &DbPool) -> Result<(), sqlx::Error> {
    if ClientRepo::count(pool).await? > 0 {
        tracing::debug!("Clients table not empty, skipping client seed");
        return Ok(());
    }

    for client in demo_clients() {
        let created = ClientRepo::create(pool, &client).await?;
        tracing::info!(id = created.id, name = %created.name, "Seeded client");
    }
    Ok(())
}

async fn seed_developers(pool: &DbPool) -> Result<(), sqlx::Error> {
    for developer in demo_developers() {
        let stored = DeveloperRepo::upsert_by_email(pool, &developer).await?;
        tracing::info!(id = stored.id, name = %stored.name, "Seeded developer");
    }
    Ok(())
}

fn demo_clients() -> Vec<NewClient> {
    vec![
        NewClient {
            name: "Acme Corp".to_string(),
            email: "contact@acme.com".to_string(),
            phone: "555-0123".to_string(),
            details: Some("Leading supplier of road runner traps.".to_string()),
            budget: "50000".to_string(),
            status: "In Progress".to_string(),
            assigned_developer: Some("John Doe".to_string()),
        },
        NewClient {
            name: "Wayne Enterprises".to_string(),
            email: "bruce@wayne.com".to_string(),
            phone: "555-0999".to_string(),
            details: Some("Secret project 'Batmobile upgrade'.".to_string()),
            budget: "1000000".to_string(),
            status: "New".to_string(),
            assigned_developer: Some("Lucius Fox".to_string()),
        },
        NewClient {
            name: "Stark Industries".to_string(),
            email: "tony@stark.com".to_string(),
            phone: "555-3000".to_string(),
            details: Some("Jarvis AI enhancement.".to_string()),
            budget: "5000000".to_string(),
            status: "Completed".to_string(),
            assigned_developer: Some("Tony Stark".to_string()),
        },
    ]
}

/// The demo developers cover every `assigned_developer` label used by the
/// seeded clients, plus one unassigned developer.
fn demo_developers() -> Vec<NewDeveloper> {
    vec![
        NewDeveloper {
            name: "John Doe".to_string(),
            email: "john.doe@devshop.io".to_string(),
            tech_stack: Some("Rust, Axum, PostgreSQL".to_string()),
            skills: Some("Backend APIs, database design".to_string()),
            description: Some("Senior backend engineer.".to_string()),
        },
        NewDeveloper {
            name: "Lucius Fox".to_string(),
            email: "lucius.fox@devshop.io".to_string(),
            tech_stack: Some("React, TypeScript, Node.js".to_string()),
            skills: Some("Frontend architecture, design systems".to_string()),
            description: Some("Lead frontend engineer.".to_string()),
        },
        NewDeveloper {
            name: "Tony Stark".to_string(),
            email: "tony.stark@devshop.io".to_string(),
            tech_stack: Some("Python, PyTorch, Kubernetes".to_string()),
            skills: Some("Machine learning, infrastructure".to_string()),
            description: Some("ML and platform specialist.".to_string()),
        },
        NewDeveloper {
            name: "Diana Prince".to_string(),
            email: "diana.prince@devshop.io".to_string(),
            tech_stack: Some("Go, Terraform, AWS".to_string()),
            skills: Some("Cloud infrastructure, CI/CD".to_string()),
            description: Some("DevOps engineer, currently unassigned.".to_string()),
        },
    ]
}
