mod cli_args_test;
mod html_input_test;
mod pipeline_test;
