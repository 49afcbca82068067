use dbmanager_codegen::prelude::*;

use crate::codegen::{customer_item, generator_for, order_item};
use crate::read_artifact;

#[test]
fn test_home_registers_every_query_file() {
    let dir = tempfile::tempdir().unwrap();
    let generator = generator_for(
        vec![customer_item(), order_item()],
        DbLayerMode::Reflection,
        dir.path(),
    );
    generator.generate().unwrap();

    let home = read_artifact(&dir.path().join("DbLayer/AppDb.cs"));
    let expected = "\
using System;
using DotNetToolBox.Database;

namespace Sample.Data
{
    public partial class AppDb : IDisposable
    {
        private DbManager _db;

        public AppDb(string connectionString, string provider)
        {
            _db = new DbManager(connectionString, provider);
            RegisterRequests();
        }

        public void Open()
        {
            _db.Open();
        }

        public void Close()
        {
            _db.Close();
        }

        public void Dispose()
        {
            _db.Dispose();
        }

        private void RegisterRequests()
        {
            _db.AddRequestsFromFile(@\"Queries\\Customer.xml\");
            _db.AddRequestsFromFile(@\"Queries\\Order.xml\");
        }
    }
}
";
    assert_eq!(home, expected);
}

#[test]
fn test_reflection_partial_content() {
    let dir = tempfile::tempdir().unwrap();
    let generator = generator_for(vec![customer_item()], DbLayerMode::Reflection, dir.path());
    generator.generate().unwrap();

    let partial = read_artifact(&dir.path().join("DbLayer/AppDb.Customer.cs"));
    let expected = "\
using System;
using System.Collections.Generic;
using DotNetToolBox.Database;
using Sample.Objects;

namespace Sample.Data
{
    public partial class AppDb
    {
        public List<Customer> GetAllCustomers()
        {
            List<Customer> list = new List<Customer>();
            _db.FillObjectsWithRequest(\"Customer_SelectAll\", null, list);
            return list;
        }

        public Customer GetCustomerById(Int64 id)
        {
            List<Customer> list = new List<Customer>();
            List<DbManagerParameter> parameters = new List<DbManagerParameter>();
            parameters.Add(new DbManagerParameter(\"@Id\", id));
            _db.FillObjectsWithRequest(\"Customer_SelectById\", parameters, list);
            return list.Count > 0 ? list[0] : null;
        }

        public void InsertCustomer(Customer customer)
        {
            List<DbManagerParameter> parameters = new List<DbManagerParameter>();
            parameters.Add(new DbManagerParameter(\"@Id\", customer.Id));
            parameters.Add(new DbManagerParameter(\"@UserName\", customer.UserName));
            parameters.Add(new DbManagerParameter(\"@CreatedDate\", customer.CreatedDate));
            _db.ExecuteNonQueryWithRequest(\"Customer_Insert\", parameters);
        }

        public void UpdateCustomer(Customer customer)
        {
            List<DbManagerParameter> parameters = new List<DbManagerParameter>();
            parameters.Add(new DbManagerParameter(\"@Id\", customer.Id));
            parameters.Add(new DbManagerParameter(\"@UserName\", customer.UserName));
            parameters.Add(new DbManagerParameter(\"@CreatedDate\", customer.CreatedDate));
            _db.ExecuteNonQueryWithRequest(\"Customer_Update\", parameters);
        }

        public void DeleteCustomer(Int64 id)
        {
            List<DbManagerParameter> parameters = new List<DbManagerParameter>();
            parameters.Add(new DbManagerParameter(\"@Id\", id));
            _db.ExecuteNonQueryWithRequest(\"Customer_Delete\", parameters);
        }
    }
}
";
    assert_eq!(partial, expected);
}

#[test]
fn test_direct_partial_maps_reader_columns() {
    let dir = tempfile::tempdir().unwrap();
    let generator = generator_for(vec![customer_item()], DbLayerMode::Direct, dir.path());
    generator.generate().unwrap();

    let partial = read_artifact(&dir.path().join("DbLayer/AppDb.Customer.cs"));

    assert!(partial.contains("using System.Data.Common;\n"));
    assert!(partial.contains(
        "using (DbDataReader reader = _db.ExecuteReaderWithRequest(\"Customer_SelectAll\", null))"
    ));
    assert!(partial.contains("while (reader.Read())"));
    assert!(partial.contains("customer.Id = (Int64)reader[\"ID\"];"));
    assert!(partial.contains("customer.UserName = (String)reader[\"USER_NAME\"];"));
    assert!(partial.contains("customer.CreatedDate = (DateTime)reader[\"CREATED_DATE\"];"));
    // Non-query methods stay request-based in direct mode.
    assert!(partial.contains("_db.ExecuteNonQueryWithRequest(\"Customer_Insert\", parameters);"));
}

#[test]
fn test_direct_select_by_id_returns_single_instance() {
    let dir = tempfile::tempdir().unwrap();
    let generator = generator_for(vec![customer_item()], DbLayerMode::Direct, dir.path());
    generator.generate().unwrap();

    let partial = read_artifact(&dir.path().join("DbLayer/AppDb.Customer.cs"));
    let expected_method = "\
        public Customer GetCustomerById(Int64 id)
        {
            Customer customer = null;
            List<DbManagerParameter> parameters = new List<DbManagerParameter>();
            parameters.Add(new DbManagerParameter(\"@Id\", id));
            using (DbDataReader reader = _db.ExecuteReaderWithRequest(\"Customer_SelectById\", parameters))
            {
                if (reader.Read())
                {
                    customer = new Customer();
                    customer.Id = (Int64)reader[\"ID\"];
                    customer.UserName = (String)reader[\"USER_NAME\"];
                    customer.CreatedDate = (DateTime)reader[\"CREATED_DATE\"];
                }
            }
            return customer;
        }
";
    assert!(partial.contains(expected_method));
}

#[test]
fn test_partial_without_operations_is_a_skeleton() {
    let dir = tempfile::tempdir().unwrap();
    let mut item = customer_item();
    item.use_select_all = false;
    item.use_select_by_id = false;
    item.use_insert = false;
    item.use_update = false;
    item.use_delete = false;

    let generator = generator_for(vec![item], DbLayerMode::Reflection, dir.path());
    generator.generate().unwrap();

    let partial = read_artifact(&dir.path().join("DbLayer/AppDb.Customer.cs"));
    assert!(partial.contains("public partial class AppDb\n"));
    assert!(!partial.contains("public List<"));
    assert!(!partial.contains("public void "));
}
