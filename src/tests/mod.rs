mod integration_local_template_source;
mod unit_config_and_helpers;
