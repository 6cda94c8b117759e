pub mod m202510150001_create_essays;
