pub mod classify_service;
