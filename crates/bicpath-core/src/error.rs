/// Core domain errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid BIC: identifier must not be empty")]
    EmptyBic,

    #[error("invalid transfer time {time} on link {from} -> {to}")]
    InvalidTime { from: String, to: String, time: f64 },

    #[error("invalid charge {charge} for bank {bic}")]
    InvalidCharge { bic: String, charge: f64 },
}
