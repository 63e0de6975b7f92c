pub mod hex_index;
