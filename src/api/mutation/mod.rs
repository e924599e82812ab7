pub mod update_item_field;
