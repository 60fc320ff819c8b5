pub mod remit;
