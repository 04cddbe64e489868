/// Business logic that sits on top of the data model
pub mod birthday_service;
