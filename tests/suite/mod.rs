mod config;
mod properties;
mod scenarios;
