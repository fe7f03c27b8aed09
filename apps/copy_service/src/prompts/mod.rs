pub mod marketing_copy_prompt;
