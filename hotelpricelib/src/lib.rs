//! hotelpricelib: самый дешёвый номер и итоговые цены с налогами по котировкам отеля.

pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod pricing;
pub mod report;
pub mod traits;

pub mod formats {
    pub mod grid;
    pub mod json;
    pub mod text;
}
