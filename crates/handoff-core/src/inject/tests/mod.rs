mod tests_existing;
