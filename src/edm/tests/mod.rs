mod tests_binding_target;
