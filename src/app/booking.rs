// Showroom - app/booking.rs
//
// Booking desk: the boundary where a consultation request leaves the
// catalog. Nothing is transmitted or stored. A request is checked against
// the catalog's design options, logged without contact details, and
// acknowledged with a local reference.

use crate::core::catalog::Catalog;
use crate::core::model::DesignOption;
use crate::util::error::BookingError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Form fields as submitted by the booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub pickup: String,
    pub destination: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`, 24-hour.
    pub time: String,
    pub passengers: u32,
    pub contact_name: String,
    pub contact_phone: String,
}

/// Acknowledgement returned for an accepted request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingReceipt {
    /// Local reference, e.g. "BK-000001".
    pub reference: String,
    pub option_id: String,
    pub option_name: String,
    pub scheduled_for: NaiveDateTime,
    pub passengers: u32,
}

/// Accepts booking requests for one catalog.
#[derive(Debug)]
pub struct BookingDesk<'a> {
    catalog: &'a Catalog,
    next_reference: AtomicU64,
}

impl<'a> BookingDesk<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            next_reference: AtomicU64::new(1),
        }
    }

    /// Design options a request can target.
    pub fn options(&self) -> &'a [DesignOption] {
        self.catalog.design_options()
    }

    /// Check and acknowledge a request for the given design option.
    pub fn submit(
        &self,
        option_id: &str,
        request: &BookingRequest,
    ) -> Result<BookingReceipt, BookingError> {
        let option =
            self.catalog
                .design_option(option_id)
                .ok_or_else(|| BookingError::UnknownOption {
                    option_id: option_id.to_string(),
                })?;

        require("pickup", &request.pickup)?;
        require("destination", &request.destination)?;
        require("contact_name", &request.contact_name)?;
        require("contact_phone", &request.contact_phone)?;

        if request.passengers == 0 {
            return Err(BookingError::NoPassengers);
        }

        let date = NaiveDate::parse_from_str(request.date.trim(), "%Y-%m-%d").map_err(|e| {
            BookingError::InvalidDate {
                raw: request.date.clone(),
                source: e,
            }
        })?;
        let time = NaiveTime::parse_from_str(request.time.trim(), "%H:%M").map_err(|e| {
            BookingError::InvalidTime {
                raw: request.time.clone(),
                source: e,
            }
        })?;

        let n = self.next_reference.fetch_add(1, Ordering::Relaxed);
        let receipt = BookingReceipt {
            reference: format!("BK-{n:06}"),
            option_id: option.id.clone(),
            option_name: option.name.clone(),
            scheduled_for: date.and_time(time),
            passengers: request.passengers,
        };

        tracing::info!(
            reference = %receipt.reference,
            option = %receipt.option_id,
            scheduled_for = %receipt.scheduled_for,
            passengers = receipt.passengers,
            "Booking request acknowledged"
        );

        Ok(receipt)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), BookingError> {
    if value.trim().is_empty() {
        return Err(BookingError::MissingField { field });
    }
    Ok(())
}
