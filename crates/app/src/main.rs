//! `onboard-app` -- onboarding queue console.
//!
//! Fetches the in-flight application queue from the backend and prints
//! each row together with the screen a click on it would open. Useful for
//! eyeballing the queue and the routing decisions without a browser.
//!
//! # Environment variables
//!
//! | Variable                       | Required | Default | Description                               |
//! |--------------------------------|----------|---------|-------------------------------------------|
//! | `ONBOARD_EMPLOYEE_API_URL`     | no       | `http://localhost:8080/api` | Employee service base URL |
//! | `ONBOARD_MODULE_API_URL`       | no       | `http://localhost:8080/api/employeeModule` | Reference-data base URL |
//! | `ONBOARD_COMMON_API_URL`       | no       | `http://localhost:9000/common` | Common service (PIN codes) base URL |
//! | `ONBOARD_REQUEST_TIMEOUT_SECS` | no       | `30`    | Per-request timeout                       |
//! | `ONBOARD_ROLE`                 | no       | `hr`    | Desk to list for: `hr`, `do`, or `co`     |

use anyhow::Context;

use onboard_client::{ClientConfig, OnboardClient};
use onboard_core::router::{route, Destination, Office};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Which desk the console lists the queue for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Hr,
    DivisionalOffice,
    CentralOffice,
}

impl Role {
    fn from_env() -> Self {
        match std::env::var("ONBOARD_ROLE").as_deref() {
            Ok("do") => Self::DivisionalOffice,
            Ok("co") => Self::CentralOffice,
            _ => Self::Hr,
        }
    }

    /// HR sees everything; the review desks see only their own pile.
    fn shows(self, destination: &Destination) -> bool {
        match self {
            Self::Hr => true,
            Self::DivisionalOffice => {
                matches!(destination, Destination::Review { office: Office::Divisional, .. })
            }
            Self::CentralOffice => {
                matches!(destination, Destination::Review { office: Office::Central, .. })
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onboard_app=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    let role = Role::from_env();
    tracing::info!(employee_api = %config.employee_api, ?role, "Starting onboard-app");

    let client = OnboardClient::new(config).context("build HTTP client")?;
    let rows = client
        .onboarding_queue()
        .await
        .context("fetch onboarding queue")?;

    tracing::info!(count = rows.len(), "Queue fetched");

    for row in &rows {
        let routed = route(row);
        if let Ok(destination) = &routed {
            if !role.shows(destination) {
                continue;
            }
        }
        let where_to = match routed {
            Ok(Destination::Wizard {
                temp_id, edit_mode, ..
            }) => {
                if edit_mode {
                    format!("wizard (resume {temp_id})")
                } else {
                    format!("wizard ({temp_id})")
                }
            }
            Ok(Destination::Review { office, temp_id }) => {
                format!("{office:?} review ({temp_id})")
            }
            Ok(Destination::SkillTest { temp_id }) => format!("skill test ({temp_id})"),
            Ok(Destination::NotClickable) => "--".to_string(),
            Err(err) => format!("unroutable: {err}"),
        };
        println!(
            "{:>8}  {:<28} {:<16} {}",
            row.hr_employee_id, row.employee_name, row.status, where_to
        );
    }

    Ok(())
}
