mod common;
mod composition;
mod scoring;
