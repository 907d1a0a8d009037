use super::args::{
    Cli, Commands, ConfigCommand, LeaseCommand, PaymentCommand, TenantCommand, UnitCommand,
    ViewModeArgs,
};
use super::handlers::{self, HandlerContext};
use anyhow::{Result, bail};
use chrono::Local;
use leasedesk_engine::{LeaseForm, PaymentForm};
use leasedesk_runtime::{LeaseDesk, resolve_data_dir};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let context = |view_mode: &ViewModeArgs| HandlerContext::new(cli.format, view_mode, today);
    let plain = ViewModeArgs::default();

    let Some(command) = cli.command else {
        let desk = LeaseDesk::open(data_dir)?;
        show_guidance(&desk);
        return Ok(());
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&data_dir, &context(&plain)),
            ConfigCommand::SetUrl { url } => {
                handlers::config::set_url(&data_dir, &url, &context(&plain))
            }
        },

        Commands::Login { username, password } => {
            let mut desk = LeaseDesk::open(data_dir)?;
            handlers::session::login(&mut desk, username, password, &context(&plain))
        }

        Commands::Logout => {
            let mut desk = LeaseDesk::open(data_dir)?;
            handlers::session::logout(&mut desk, &context(&plain))
        }

        Commands::Whoami => {
            let desk = LeaseDesk::open(data_dir)?;
            handlers::session::whoami(&desk, &context(&plain))
        }

        Commands::Status { wait, max_attempts } => {
            let desk = LeaseDesk::open(data_dir)?;
            handlers::status::handle(&desk, wait, max_attempts, &context(&plain))
        }

        Commands::Dashboard { view_mode } => {
            let desk = open_session(&data_dir)?;
            handlers::dashboard::handle(&desk, &context(&view_mode))
        }

        Commands::Tenant { command } => {
            let desk = open_session(&data_dir)?;
            match command {
                TenantCommand::List { list } => {
                    handlers::tenants::list(&desk, &list, &context(&list.view_mode))
                }
                TenantCommand::Sort { key } => handlers::tenants::sort(&desk, &key, &context(&plain)),
                TenantCommand::Add { name, contact } => {
                    handlers::tenants::add(&desk, name, contact, &context(&plain))
                }
                TenantCommand::Edit { id, name, contact } => {
                    handlers::tenants::edit(&desk, id, name, contact, &context(&plain))
                }
                TenantCommand::Delete(args) => {
                    handlers::tenants::delete(&desk, args.id, args.yes, &context(&plain))
                }
            }
        }

        Commands::Unit { command } => {
            let desk = open_session(&data_dir)?;
            match command {
                UnitCommand::List { list, status } => handlers::units::list(
                    &desk,
                    &list,
                    status.as_deref(),
                    &context(&list.view_mode),
                ),
                UnitCommand::Sort { key } => handlers::units::sort(&desk, &key, &context(&plain)),
                UnitCommand::Add {
                    number,
                    building,
                    status,
                } => handlers::units::add(&desk, number, building, status, &context(&plain)),
                UnitCommand::Edit {
                    id,
                    number,
                    building,
                    status,
                } => handlers::units::edit(&desk, id, number, building, status, &context(&plain)),
                UnitCommand::Delete(args) => {
                    handlers::units::delete(&desk, args.id, args.yes, &context(&plain))
                }
            }
        }

        Commands::Lease { command } => {
            let desk = open_session(&data_dir)?;
            match command {
                LeaseCommand::List { list } => {
                    handlers::leases::list(&desk, &list, &context(&list.view_mode))
                }
                LeaseCommand::Sort { key } => handlers::leases::sort(&desk, &key, &context(&plain)),
                LeaseCommand::Add {
                    tenant,
                    unit,
                    start,
                    end,
                    rent,
                } => {
                    let form = LeaseForm {
                        tenant_id: tenant,
                        unit_id: unit,
                        start_date: start,
                        end_date: end,
                        rent_amount: rent,
                    };
                    handlers::leases::add(&desk, form, &context(&plain))
                }
                LeaseCommand::Edit {
                    id,
                    tenant,
                    unit,
                    start,
                    end,
                    rent,
                } => {
                    let overrides = LeaseForm {
                        tenant_id: tenant,
                        unit_id: unit,
                        start_date: start,
                        end_date: end,
                        rent_amount: rent,
                    };
                    handlers::leases::edit(&desk, id, overrides, &context(&plain))
                }
                LeaseCommand::Delete(args) => {
                    handlers::leases::delete(&desk, args.id, args.yes, &context(&plain))
                }
            }
        }

        Commands::Payment { command } => {
            let desk = open_session(&data_dir)?;
            match command {
                PaymentCommand::List { list, status } => handlers::payments::list(
                    &desk,
                    &list,
                    status.as_deref(),
                    &context(&list.view_mode),
                ),
                PaymentCommand::Sort { key } => {
                    handlers::payments::sort(&desk, &key, &context(&plain))
                }
                PaymentCommand::Add {
                    tenant,
                    lease,
                    amount,
                    date,
                    status,
                } => {
                    let form = PaymentForm {
                        tenant_id: tenant,
                        lease_id: lease,
                        amount,
                        payment_date: date,
                        status,
                    };
                    handlers::payments::add(&desk, form, &context(&plain))
                }
                PaymentCommand::Edit {
                    id,
                    tenant,
                    lease,
                    amount,
                    date,
                    status,
                } => {
                    let overrides = PaymentForm {
                        tenant_id: tenant,
                        lease_id: lease,
                        amount,
                        payment_date: date,
                        ..PaymentForm::default()
                    };
                    handlers::payments::edit(&desk, id, overrides, status, &context(&plain))
                }
                PaymentCommand::Delete(args) => {
                    handlers::payments::delete(&desk, args.id, args.yes, &context(&plain))
                }
            }
        }
    }
}

/// Record screens and the dashboard sit behind the login.
fn open_session(data_dir: &Path) -> Result<LeaseDesk> {
    let desk = LeaseDesk::open(data_dir.to_path_buf())?;
    if desk.identity().is_none() {
        bail!("Not logged in. Run 'leasedesk login' first.");
    }
    Ok(desk)
}

fn show_guidance(desk: &LeaseDesk) {
    println!("leasedesk - Rental backend administration\n");

    match desk.identity() {
        None => {
            println!("Get started:");
            println!("  leasedesk login -u <USERNAME> -p <PASSWORD>\n");
            println!("Backend: {}", desk.api().base_url());
            println!("  leasedesk status                  # Check the connection");
            println!("  leasedesk config set-url <URL>    # Point at another backend\n");
        }
        Some(identity) => {
            println!("Logged in as {}\n", identity);
            println!("Quick commands:");
            println!("  leasedesk dashboard               # Totals and recent payments");
            println!("  leasedesk tenant list             # Browse tenants");
            println!("  leasedesk lease list              # Leases with their activity");
            println!("  leasedesk payment add --help      # Record a payment\n");
        }
    }

    println!("For more commands:");
    println!("  leasedesk --help");
}
