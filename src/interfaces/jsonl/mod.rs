pub mod invocation_reader;
pub mod result_writer;
