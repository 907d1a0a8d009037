use super::common::{DeleteArgs, ListArgs, ViewModeArgs};
use chrono::NaiveDate;
use clap::Subcommand;
use leasedesk_types::{PaymentStatus, UnitStatus};
use rust_decimal::Decimal;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Log in with the demo operator account")]
    Login {
        #[arg(long, short = 'u')]
        username: Option<String>,

        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    #[command(about = "Forget the stored session")]
    Logout,

    #[command(about = "Show the logged-in operator")]
    Whoami,

    #[command(about = "Check backend connectivity")]
    Status {
        /// Keep probing on the poll interval until the backend answers
        #[arg(long)]
        wait: bool,

        /// Give up after this many probes (with --wait)
        #[arg(long)]
        max_attempts: Option<u32>,
    },

    #[command(about = "Show totals, occupancy and recent payments")]
    Dashboard {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Manage tenants")]
    Tenant {
        #[command(subcommand)]
        command: TenantCommand,
    },

    #[command(about = "Manage units")]
    Unit {
        #[command(subcommand)]
        command: UnitCommand,
    },

    #[command(about = "Manage leases")]
    Lease {
        #[command(subcommand)]
        command: LeaseCommand,
    },

    #[command(about = "Manage payments")]
    Payment {
        #[command(subcommand)]
        command: PaymentCommand,
    },

    #[command(about = "Show or change configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum TenantCommand {
    #[command(about = "List tenants")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    #[command(about = "Toggle the remembered sort column (id, name, contact)")]
    Sort { key: String },

    #[command(about = "Add a tenant")]
    Add {
        #[arg(long, default_value = "")]
        name: String,

        /// Email address or phone number
        #[arg(long, default_value = "")]
        contact: String,
    },

    #[command(about = "Edit a tenant; omitted fields keep their current value")]
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        contact: Option<String>,
    },

    #[command(about = "Delete a tenant")]
    Delete(DeleteArgs),
}

#[derive(Subcommand)]
pub enum UnitCommand {
    #[command(about = "List units")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// available, occupied, maintenance or all
        #[arg(long)]
        status: Option<String>,
    },

    #[command(about = "Toggle the remembered sort column (id, number, building, status)")]
    Sort { key: String },

    #[command(about = "Add a unit")]
    Add {
        #[arg(long, default_value = "")]
        number: String,

        #[arg(long, default_value = "")]
        building: String,

        #[arg(long, default_value = "available")]
        status: UnitStatus,
    },

    #[command(about = "Edit a unit; omitted fields keep their current value")]
    Edit {
        id: i64,

        #[arg(long)]
        number: Option<String>,

        #[arg(long)]
        building: Option<String>,

        #[arg(long)]
        status: Option<UnitStatus>,
    },

    #[command(about = "Delete a unit")]
    Delete(DeleteArgs),
}

#[derive(Subcommand)]
pub enum LeaseCommand {
    #[command(about = "List leases with their current activity")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    #[command(about = "Toggle the remembered sort column (id, tenant, unit, start, end, rent)")]
    Sort { key: String },

    #[command(about = "Create a lease; the unit must be available")]
    Add {
        #[arg(long)]
        tenant: Option<i64>,

        #[arg(long)]
        unit: Option<i64>,

        /// YYYY-MM-DD
        #[arg(long)]
        start: Option<NaiveDate>,

        /// YYYY-MM-DD
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Monthly rent
        #[arg(long)]
        rent: Option<Decimal>,
    },

    #[command(about = "Edit a lease; omitted fields keep their current value")]
    Edit {
        id: i64,

        #[arg(long)]
        tenant: Option<i64>,

        #[arg(long)]
        unit: Option<i64>,

        #[arg(long)]
        start: Option<NaiveDate>,

        #[arg(long)]
        end: Option<NaiveDate>,

        #[arg(long)]
        rent: Option<Decimal>,
    },

    #[command(about = "Delete a lease")]
    Delete(DeleteArgs),
}

#[derive(Subcommand)]
pub enum PaymentCommand {
    #[command(about = "List payments with the completed total")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// completed, pending, failed or all
        #[arg(long)]
        status: Option<String>,
    },

    #[command(about = "Toggle the remembered sort column (id, tenant, lease, amount, date, status)")]
    Sort { key: String },

    #[command(about = "Record a payment against one of the tenant's leases")]
    Add {
        #[arg(long)]
        tenant: Option<i64>,

        #[arg(long)]
        lease: Option<i64>,

        #[arg(long)]
        amount: Option<Decimal>,

        /// YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long, default_value = "completed")]
        status: PaymentStatus,
    },

    #[command(about = "Edit a payment; omitted fields keep their current value")]
    Edit {
        id: i64,

        #[arg(long)]
        tenant: Option<i64>,

        #[arg(long)]
        lease: Option<i64>,

        #[arg(long)]
        amount: Option<Decimal>,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        status: Option<PaymentStatus>,
    },

    #[command(about = "Delete a payment")]
    Delete(DeleteArgs),
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Persist a new backend base URL")]
    SetUrl { url: String },
}
