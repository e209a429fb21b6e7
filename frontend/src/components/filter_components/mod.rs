pub mod filter_dropdown;
