//! Local form validation. Forms collect raw user input, validate it without
//! touching the backend and produce the draft body to submit.

use crate::lookup::{find_by_id, leases_for_tenant};
use chrono::NaiveDate;
use leasedesk_types::{
    Lease, LeaseDraft, Payment, PaymentDraft, PaymentStatus, RecordId, Tenant, TenantDraft,
    Unit, UnitDraft, UnitStatus,
};
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-()]+$").expect("valid phone pattern"));

const MIN_PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

/// Per-field errors in the order the form declares its fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, reason: impl Into<String>) {
        self.0.push(FieldError {
            field,
            reason: reason.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.reason.as_str())
    }

    fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reasons: Vec<&str> = self.0.iter().map(|e| e.reason.as_str()).collect();
        f.write_str(&reasons.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Whether a form submits a new record or updates an existing one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(RecordId),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value) && value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

fn positive(value: Option<Decimal>) -> Option<bool> {
    value.map(|amount| amount > Decimal::ZERO)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantForm {
    pub name: String,
    pub contact_info: String,
}

impl TenantForm {
    pub fn validate(&self) -> Result<TenantDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = self.name.trim();
        let contact = self.contact_info.trim();

        if name.is_empty() {
            errors.push("name", "Name is required");
        }
        if contact.is_empty() {
            errors.push("contactInfo", "Contact info is required");
        } else if !is_valid_email(contact) && !is_valid_phone(contact) {
            errors.push("contactInfo", "Please enter a valid email or phone number");
        }

        errors.finish(|| TenantDraft {
            name: name.to_string(),
            contact_info: contact.to_string(),
        })
    }
}

impl From<&Tenant> for TenantForm {
    fn from(tenant: &Tenant) -> Self {
        Self {
            name: tenant.name.clone(),
            contact_info: tenant.contact_info.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitForm {
    pub unit_number: String,
    pub building: String,
    pub status: UnitStatus,
}

impl UnitForm {
    pub fn validate(&self) -> Result<UnitDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let unit_number = self.unit_number.trim();
        let building = self.building.trim();

        if unit_number.is_empty() {
            errors.push("unitNumber", "Unit number is required");
        }
        if building.is_empty() {
            errors.push("building", "Building is required");
        }

        errors.finish(|| UnitDraft {
            unit_number: unit_number.to_string(),
            building: building.to_string(),
            status: self.status,
        })
    }
}

impl From<&Unit> for UnitForm {
    fn from(unit: &Unit) -> Self {
        Self {
            unit_number: unit.unit_number.clone(),
            building: unit.building.clone(),
            status: unit.status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaseForm {
    pub tenant_id: Option<RecordId>,
    pub unit_id: Option<RecordId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub rent_amount: Option<Decimal>,
}

impl LeaseForm {
    /// `units` is consulted on create only: a new lease must take an available unit.
    /// A unit missing from `units` is left for the backend to reject.
    pub fn validate(&self, mode: FormMode, units: &[Unit]) -> Result<LeaseDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.tenant_id.is_none() {
            errors.push("tenantId", "Tenant is required");
        }
        match self.unit_id {
            None => errors.push("unitId", "Unit is required"),
            Some(unit_id) if !mode.is_edit() => {
                if let Some(unit) = find_by_id(units, unit_id)
                    && unit.status != UnitStatus::Available
                {
                    errors.push("unitId", format!("Unit {} is not available", unit.label()));
                }
            }
            Some(_) => {}
        }
        if self.start_date.is_none() {
            errors.push("startDate", "Start date is required");
        }
        match (self.start_date, self.end_date) {
            (_, None) => errors.push("endDate", "End date is required"),
            (Some(start), Some(end)) if end <= start => {
                errors.push("endDate", "End date must be after start date")
            }
            _ => {}
        }
        match positive(self.rent_amount) {
            None => errors.push("rentAmount", "Rent amount is required"),
            Some(false) => errors.push("rentAmount", "Rent amount must be greater than 0"),
            Some(true) => {}
        }

        match (self.tenant_id, self.unit_id, self.start_date, self.end_date, self.rent_amount) {
            (Some(tenant_id), Some(unit_id), Some(start_date), Some(end_date), Some(rent_amount))
                if errors.is_empty() =>
            {
                Ok(LeaseDraft {
                    tenant_id,
                    unit_id,
                    start_date,
                    end_date,
                    rent_amount,
                })
            }
            _ => Err(errors),
        }
    }
}

impl From<&Lease> for LeaseForm {
    fn from(lease: &Lease) -> Self {
        Self {
            tenant_id: Some(lease.tenant_id),
            unit_id: Some(lease.unit_id),
            start_date: Some(lease.start_date),
            end_date: Some(lease.end_date),
            rent_amount: Some(lease.rent_amount),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentForm {
    pub tenant_id: Option<RecordId>,
    pub lease_id: Option<RecordId>,
    pub amount: Option<Decimal>,
    pub payment_date: Option<NaiveDate>,
    pub status: PaymentStatus,
}

impl PaymentForm {
    /// The chosen lease must be one of the tenant's leases in `leases`.
    pub fn validate(&self, leases: &[Lease]) -> Result<PaymentDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.tenant_id.is_none() {
            errors.push("tenantId", "Tenant is required");
        }
        match (self.tenant_id, self.lease_id) {
            (_, None) => errors.push("leaseId", "Lease is required"),
            (Some(tenant_id), Some(lease_id)) => {
                let tenant_leases = leases_for_tenant(leases, tenant_id);
                if tenant_leases.is_empty() {
                    errors.push("leaseId", "No active leases found for this tenant");
                } else if !tenant_leases.iter().any(|lease| lease.id == lease_id) {
                    errors.push(
                        "leaseId",
                        format!("Lease #{lease_id} does not belong to this tenant"),
                    );
                }
            }
            (None, Some(_)) => {}
        }
        match positive(self.amount) {
            None => errors.push("amount", "Amount is required"),
            Some(false) => errors.push("amount", "Amount must be greater than 0"),
            Some(true) => {}
        }
        if self.payment_date.is_none() {
            errors.push("paymentDate", "Payment date is required");
        }

        match (self.tenant_id, self.lease_id, self.amount, self.payment_date) {
            (Some(tenant_id), Some(lease_id), Some(amount), Some(payment_date))
                if errors.is_empty() =>
            {
                Ok(PaymentDraft {
                    tenant_id,
                    lease_id,
                    amount,
                    payment_date,
                    status: self.status,
                })
            }
            _ => Err(errors),
        }
    }
}

impl From<&Payment> for PaymentForm {
    fn from(payment: &Payment) -> Self {
        Self {
            tenant_id: Some(payment.tenant_id),
            lease_id: Some(payment.lease_id),
            amount: Some(payment.amount),
            payment_date: Some(payment.payment_date),
            status: payment.status,
        }
    }
}
