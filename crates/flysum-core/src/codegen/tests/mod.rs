mod tests_identifier;
mod tests_writer;
