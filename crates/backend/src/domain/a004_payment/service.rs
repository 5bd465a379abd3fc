use super::repository::{self, PaymentQuery};
use crate::shared::dates::{day_ceil, day_floor};
use crate::shared::error::{DomainError, DomainResult};
use crate::shared::pagination::PageCursor;
use contracts::domain::a004_payment::aggregate::Payment;
use contracts::enums::payment_method::PaymentMethod;
use contracts::enums::payment_status::PaymentStatus;
use uuid::Uuid;

pub async fn get_by_id(id: Uuid) -> DomainResult<Option<Payment>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn delete(id: Uuid) -> DomainResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn list_page(
    status: Option<String>,
    method: Option<String>,
    date_from: Option<String>,
    date_to: Option<String>,
    cursor: Option<PageCursor>,
    page_size: u64,
) -> DomainResult<Vec<Payment>> {
    let filters = PaymentQuery {
        status: parse_status(status)?,
        method: parse_method(method)?,
        created_from: date_from
            .filter(|d| !d.is_empty())
            .map(|d| day_floor(&d))
            .transpose()
            .map_err(|e| DomainError::Validation(e.to_string()))?,
        created_to: date_to
            .filter(|d| !d.is_empty())
            .map(|d| day_ceil(&d))
            .transpose()
            .map_err(|e| DomainError::Validation(e.to_string()))?,
    };
    Ok(repository::list_page(&filters, cursor.as_ref(), page_size).await?)
}

fn parse_status(status: Option<String>) -> DomainResult<Option<PaymentStatus>> {
    match status.filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(code) => PaymentStatus::from_code(&code)
            .map(Some)
            .ok_or_else(|| DomainError::Validation(format!("unknown status '{}'", code))),
    }
}

fn parse_method(method: Option<String>) -> DomainResult<Option<PaymentMethod>> {
    match method.filter(|m| !m.is_empty()) {
        None => Ok(None),
        Some(code) => PaymentMethod::from_code(&code)
            .map(Some)
            .ok_or_else(|| DomainError::Validation(format!("unknown method '{}'", code))),
    }
}

/// Seed checkout traffic for development; the storefront writes these in
/// production
pub async fn insert_test_data() -> DomainResult<()> {
    let data: Vec<(&str, &str, &str, i64, PaymentMethod, PaymentStatus, &str)> = vec![
        ("pay_N1a2b3", "order_1001", "arjun@example.com", 450_000, PaymentMethod::Upi, PaymentStatus::Captured, "VIP 9999900001"),
        ("pay_N4c5d6", "order_1002", "meera@example.com", 275_000, PaymentMethod::Card, PaymentStatus::Captured, "VIP 9888811111"),
        ("pay_N7e8f9", "order_1003", "dev@example.com", 125_000, PaymentMethod::Netbanking, PaymentStatus::Pending, "VIP 9777712345"),
        ("pay_Ng0h1i", "order_1004", "sara@example.com", 250_000, PaymentMethod::Upi, PaymentStatus::Failed, "Twin pack"),
        ("pay_Nj2k3l", "order_1005", "arjun@example.com", 95_000, PaymentMethod::Wallet, PaymentStatus::Refunded, "VIP 9123412341"),
        ("pay_Nm4n5o", "order_1006", "kiran@example.com", 450_000, PaymentMethod::Card, PaymentStatus::Captured, "VIP 9999900002"),
    ];

    for (payment_ref, order_ref, email, amount, method, status, item_label) in data {
        let mut payment = Payment::new_for_insert(
            payment_ref.into(),
            order_ref.into(),
            email.into(),
            amount,
            method,
            status,
            item_label.into(),
        );
        payment.validate().map_err(DomainError::Validation)?;
        payment.before_write();
        repository::insert(&payment).await?;
    }

    Ok(())
}
