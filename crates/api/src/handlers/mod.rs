pub mod car_make;
pub mod car_model;
pub mod cars;
pub mod dealer;
pub mod health;
pub mod review;
