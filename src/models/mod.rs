pub mod production_record;
