mod currency;

pub use currency::rupee_field;
