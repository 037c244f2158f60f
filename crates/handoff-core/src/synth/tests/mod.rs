mod tests_describe;
