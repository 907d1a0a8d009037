mod config;
mod dashboard;
mod mutation;
mod records;
mod session;
mod status;
