//! Named column layout of an order list.
//!
//! Every order occupies one row across seventeen fixed columns. Addressing
//! cells through this struct instead of bare letters keeps the mapping in one
//! place and lets startup reject a layout that drifted out of shape.

use crate::config::ConfigError;

/// First row that holds order data; rows above it are headers.
pub const FIRST_DATA_ROW: u32 = 3;

/// Field name → column letter for an order list.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Requester handle. Also the discovery column whose occupancy decides
    /// where the next order row lands.
    pub handle: &'static str,
    pub article_number: &'static str,
    pub full_name: &'static str,
    pub status: &'static str,
    pub buyout_price: &'static str,
    pub request_date: &'static str,
    pub payment_price: &'static str,
    pub payment_details: &'static str,
    pub social_link: &'static str,
    pub ad_date: &'static str,
    pub received_date: &'static str,
    pub paid_date: &'static str,
    pub size: &'static str,
    pub feedback_link: &'static str,
    pub feedback_available: &'static str,
    /// Message id of the originating request; identifies the row on replies.
    pub correlation: &'static str,
    pub order_number: &'static str,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            handle: "A",
            article_number: "B",
            full_name: "C",
            status: "D",
            buyout_price: "E",
            request_date: "F",
            payment_price: "G",
            payment_details: "H",
            social_link: "I",
            ad_date: "J",
            received_date: "K",
            paid_date: "L",
            size: "M",
            feedback_link: "N",
            feedback_available: "O",
            correlation: "P",
            order_number: "Q",
        }
    }
}

impl Schema {
    fn columns(&self) -> [&'static str; 17] {
        [
            self.handle,
            self.article_number,
            self.full_name,
            self.status,
            self.buyout_price,
            self.request_date,
            self.payment_price,
            self.payment_details,
            self.social_link,
            self.ad_date,
            self.received_date,
            self.paid_date,
            self.size,
            self.feedback_link,
            self.feedback_available,
            self.correlation,
            self.order_number,
        ]
    }

    /// Leftmost and rightmost columns of the row range cleared on rejection.
    /// Column order is by length first, so "Z" sorts before "AA".
    pub fn row_bounds(&self) -> (&'static str, &'static str) {
        let key = |col: &'static str| (col.len(), col);
        let columns = self.columns();
        let mut first = columns[0];
        let mut last = columns[0];
        for col in columns {
            if key(col) < key(first) {
                first = col;
            }
            if key(col) > key(last) {
                last = col;
            }
        }
        (first, last)
    }

    /// Checked once at startup: every field maps to a distinct, plausible
    /// column letter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let columns = self.columns();
        for col in columns {
            let ok = !col.is_empty()
                && col.len() <= 2
                && col.bytes().all(|b| b.is_ascii_uppercase());
            if !ok {
                return Err(ConfigError::Invalid(format!(
                    "column `{col}` is not a valid column letter"
                )));
            }
        }
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].contains(col) {
                return Err(ConfigError::Invalid(format!(
                    "column `{col}` is mapped to more than one field"
                )));
            }
        }
        Ok(())
    }
}
