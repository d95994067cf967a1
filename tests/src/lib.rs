//! End-to-end scenarios across `zonr-common` and `zonr-core`.

mod classification;
