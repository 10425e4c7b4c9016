use alloy_sol_types::sol;

sol! {
    /// List Registry: list tokens and where each list's records are stored.
    #[derive(Debug, PartialEq, Eq)]
    interface IEFPListRegistry {
        /// Number of list tokens held by `owner`
        function balanceOf(address owner) external view returns (uint256);

        /// Packed storage location descriptor for a list token
        function getListStorageLocation(uint256 tokenId) external view returns (bytes memory);
    }

    /// Account Metadata: per-account key/value store.
    #[derive(Debug, PartialEq, Eq)]
    interface IEFPAccountMetadata {
        /// Raw value stored under `key` for `addr`
        function getValue(address addr, string calldata key) external view returns (bytes memory);
    }

    /// List Records: applies encoded list operations to a storage slot.
    #[derive(Debug, PartialEq, Eq)]
    interface IEFPListRecords {
        /// Apply one encoded list operation to `slot`
        function applyListOp(uint256 slot, bytes calldata op) external;
    }
}
