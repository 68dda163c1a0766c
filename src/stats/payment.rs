//! Estado de pago de una misión
//!
//! Función pura de los dos flags de pago. Con un solo tramo pagado el
//! estado es `partial`, también en el caso saldo-sin-anticipo.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Partial,
    Complete,
}

pub fn payment_status(advance_paid: bool, balance_paid: bool) -> PaymentStatus {
    match (advance_paid, balance_paid) {
        (true, true) => PaymentStatus::Complete,
        (false, false) => PaymentStatus::Pending,
        _ => PaymentStatus::Partial,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_all_cases() {
        assert_eq!(payment_status(false, false), PaymentStatus::Pending);
        assert_eq!(payment_status(true, false), PaymentStatus::Partial);
        assert_eq!(payment_status(true, true), PaymentStatus::Complete);
        // Saldo pagado sin anticipo: un solo tramo, sigue siendo partial
        assert_eq!(payment_status(false, true), PaymentStatus::Partial);
    }
}
