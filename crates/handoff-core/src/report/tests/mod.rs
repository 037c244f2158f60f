mod tests_dry_run;
