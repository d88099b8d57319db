pub mod developer_tools;
